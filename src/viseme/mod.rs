//! Phoneme-to-viseme mapping for lip-sync animation.
//!
//! A viseme is a visual mouth shape covering a class of acoustically and
//! visually similar speech sounds. The animation runtime consumes visemes
//! as small integer IDs on a named numeric input; their geometry lives
//! entirely on the renderer side.

/// Mouth-shape classes driving the avatar's viseme input.
///
/// The discriminant is the raw ID the animation runtime receives.
/// [`Viseme::Neutral`] (4) doubles as the fallback for any phoneme core
/// absent from the mapping table and as the resting shape emitted when
/// playback completes or is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Viseme {
    /// Rounded mid-back vowel shape: OW, and the onset of OY.
    RoundedBack = 0,
    /// Open vowel shape: AA, AE, AH, AO, AW.
    Open = 1,
    /// Front vowel / diphthong shape: AY, EH, EY, IH, IY.
    Front = 2,
    /// Alveolar lateral: L.
    Lateral = 3,
    /// Resting mouth; fallback for unmapped phonemes.
    Neutral = 4,
    /// Labiodental (teeth on lip): F, V.
    Labiodental = 5,
    /// Postalveolar fricatives/affricates: CH, JH, SH, ZH.
    Postalveolar = 6,
    /// Rhotic shape: R, ER.
    Rhotic = 7,
    /// High-back rounded vowel shape: UW, UH.
    RoundedHigh = 8,
    /// Alveolar/velar/glide cluster, slight spread: D, G, K, N, NG, S, Z, W, Y.
    Spread = 9,
    /// Interdental: TH, DH.
    Interdental = 10,
    /// Bilabial closure: B, P, M.
    Bilabial = 11,
    /// Alveolar stop: T.
    AlveolarStop = 12,
}

impl Viseme {
    /// Raw integer ID consumed by the animation runtime.
    pub fn id(self) -> u8 {
        self as u8
    }
}

/// Map a stress-stripped phoneme core to its viseme class.
///
/// Cores absent from the table resolve to [`Viseme::Neutral`], never to an
/// arbitrary shape. ER is grouped with R deliberately; the source mapping
/// is preserved as given.
pub fn classify(core: &str) -> Viseme {
    match core {
        // Vowels
        "OW" | "OY" => Viseme::RoundedBack,
        "AA" | "AE" | "AH" | "AO" | "AW" => Viseme::Open,
        "AY" | "EH" | "EY" | "IH" | "IY" => Viseme::Front,
        "UW" | "UH" => Viseme::RoundedHigh,
        "ER" => Viseme::Rhotic,

        // Consonants
        "L" => Viseme::Lateral,
        "F" | "V" => Viseme::Labiodental,
        "CH" | "JH" | "SH" | "ZH" => Viseme::Postalveolar,
        "R" => Viseme::Rhotic,
        "D" | "G" | "K" | "N" | "NG" | "S" | "Z" | "W" | "Y" => Viseme::Spread,
        "TH" | "DH" => Viseme::Interdental,
        "B" | "P" | "M" => Viseme::Bilabial,
        "T" => Viseme::AlveolarStop,

        _ => Viseme::Neutral,
    }
}
