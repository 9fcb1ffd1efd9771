use {
    derive_more::Display,
    serde::{Deserialize, Serialize},
};

/// A single surface-to-underlying grammatical transformation.
///
/// Deinflection records the chain of these that turns a dictionary form
/// into the observed surface form, ordered most-recent-first: index 0 is
/// the step nearest the surface. `食べさせられた` deinflects to `食べる`
/// with the chain `[Past, CausativePassive]` read as "causative passive,
/// then past".
///
/// The `Display` form is the reader-facing English label used when
/// rendering reason chains as annotations.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    /// 〜ます
    #[display("polite")]
    Polite,
    /// 〜た / 〜だ
    #[display("past")]
    Past,
    /// 〜ました
    #[display("polite past")]
    PolitePast,
    /// 〜ない
    #[display("negative")]
    Negative,
    /// 〜ません
    #[display("polite negative")]
    PoliteNegative,
    /// 〜ませんでした
    #[display("polite past negative")]
    PoliteNegativePast,
    /// 〜ましょう
    #[display("polite volitional")]
    PoliteVolitional,
    /// 〜よう / 〜おう
    #[display("volitional")]
    Volitional,
    /// 〜て / 〜で
    #[display("-te")]
    Te,
    /// 〜ている and its contractions
    #[display("continuous")]
    Continuous,
    /// 〜(ら)れる
    #[display("passive")]
    Passive,
    /// 〜(さ)せる
    #[display("causative")]
    Causative,
    /// 〜させられる, or its fused short form 〜される
    #[display("causative passive")]
    CausativePassive,
    /// 〜れる / 〜える
    #[display("potential")]
    Potential,
    /// Ichidan 〜られる, ambiguous between potential and passive
    #[display("potential or passive")]
    PotentialOrPassive,
    /// 〜たい
    #[display("-tai")]
    Tai,
    /// 〜ず
    #[display("-zu")]
    Zu,
    /// 〜ぬ
    #[display("-nu")]
    Nu,
    /// 〜ざる
    #[display("-zaru")]
    Zaru,
    /// 〜ば
    #[display("-ba")]
    Ba,
    /// 〜たら
    #[display("-tara")]
    Tara,
    /// 〜たり
    #[display("-tari")]
    Tari,
    /// Bare continuative stem, e.g. `食べ` for `食べる`
    #[display("masu stem")]
    MasuStem,
    /// 〜ろ / e-row ending
    #[display("imperative")]
    Imperative,
    /// Dictionary form plus prohibitive 〜な
    #[display("imperative negative")]
    ImperativeNegative,
    /// 〜なさる and its short forms
    #[display("respectful")]
    Respectful,
    /// Humble auxiliaries such as 〜いたす
    #[display("humble")]
    Humble,
    /// Kansai-dialect inflection (〜へん, 〜はる, ...)
    #[display("kansai dialect")]
    Kansai,
    /// 〜ため
    #[display("-tame")]
    Tame,
    /// 〜そう
    #[display("-sou")]
    Sou,
    /// 〜すぎる
    #[display("-sugiru")]
    Sugiru,
    /// Adverbial 〜く of an i-adjective
    #[display("adv")]
    Adv,
    /// Nominalizing 〜さ of an i-adjective
    #[display("noun")]
    Noun,
    /// 〜ちゃう / 〜じゃう and 〜ちまう / 〜じまう
    #[display("-chau")]
    Chau,
    /// 〜とく / 〜どく (contracted 〜ておく)
    #[display("-toku")]
    Toku,
    /// Archaic adnominal 〜き of an i-adjective
    #[display("-ki")]
    Ki,
    /// Noun plus する stripped back to the noun
    #[display("suru verb")]
    SuruVerb,
}
