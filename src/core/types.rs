//! Common type definitions used across the codebase
//!
//! The divination vocabulary (elements, polarity, stems, branches) and the
//! sixteen temperament types are closed sets, so they are modeled as enums
//! with exhaustive matches instead of the string-keyed tables a dynamic
//! implementation would use. Serialized forms keep the traditional symbols so
//! the JSON contract stays unchanged.

use serde::{Deserialize, Serialize};

/// Five-element classification (五行)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "木")]
    Wood,
    #[serde(rename = "火")]
    Fire,
    #[serde(rename = "土")]
    Earth,
    #[serde(rename = "金")]
    Metal,
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// Cycle order used by the modular classifiers
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Traditional single-character symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Element at a cyclic index (any integer maps into the 5-cycle)
    pub fn cycle(index: i64) -> Element {
        Element::ALL[index.rem_euclid(5) as usize]
    }
}

/// Yin/yang polarity (陰陽)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "陰")]
    Yin,
    #[serde(rename = "陽")]
    Yang,
}

impl Polarity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Polarity::Yin => "陰",
            Polarity::Yang => "陽",
        }
    }

    pub fn is_yin(&self) -> bool {
        matches!(self, Polarity::Yin)
    }
}

/// Heavenly stem (天干), a ten-symbol cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Kinoe,
    #[serde(rename = "乙")]
    Kinoto,
    #[serde(rename = "丙")]
    Hinoe,
    #[serde(rename = "丁")]
    Hinoto,
    #[serde(rename = "戊")]
    Tsuchinoe,
    #[serde(rename = "己")]
    Tsuchinoto,
    #[serde(rename = "庚")]
    Kanoe,
    #[serde(rename = "辛")]
    Kanoto,
    #[serde(rename = "壬")]
    Mizunoe,
    #[serde(rename = "癸")]
    Mizunoto,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Kinoe,
        Stem::Kinoto,
        Stem::Hinoe,
        Stem::Hinoto,
        Stem::Tsuchinoe,
        Stem::Tsuchinoto,
        Stem::Kanoe,
        Stem::Kanoto,
        Stem::Mizunoe,
        Stem::Mizunoto,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Stem::Kinoe => "甲",
            Stem::Kinoto => "乙",
            Stem::Hinoe => "丙",
            Stem::Hinoto => "丁",
            Stem::Tsuchinoe => "戊",
            Stem::Tsuchinoto => "己",
            Stem::Kanoe => "庚",
            Stem::Kanoto => "辛",
            Stem::Mizunoe => "壬",
            Stem::Mizunoto => "癸",
        }
    }

    /// Position in the ten-symbol cycle
    pub fn index(&self) -> usize {
        match self {
            Stem::Kinoe => 0,
            Stem::Kinoto => 1,
            Stem::Hinoe => 2,
            Stem::Hinoto => 3,
            Stem::Tsuchinoe => 4,
            Stem::Tsuchinoto => 5,
            Stem::Kanoe => 6,
            Stem::Kanoto => 7,
            Stem::Mizunoe => 8,
            Stem::Mizunoto => 9,
        }
    }

    /// Stem at a cyclic index (any integer maps into the 10-cycle)
    pub fn cycle(index: i64) -> Stem {
        Stem::ALL[index.rem_euclid(10) as usize]
    }

    /// Each pair of adjacent stems shares an element
    pub fn element(&self) -> Element {
        match self {
            Stem::Kinoe | Stem::Kinoto => Element::Wood,
            Stem::Hinoe | Stem::Hinoto => Element::Fire,
            Stem::Tsuchinoe | Stem::Tsuchinoto => Element::Earth,
            Stem::Kanoe | Stem::Kanoto => Element::Metal,
            Stem::Mizunoe | Stem::Mizunoto => Element::Water,
        }
    }
}

/// Earthly branch (地支), a twelve-symbol cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Rat,
    #[serde(rename = "丑")]
    Ox,
    #[serde(rename = "寅")]
    Tiger,
    #[serde(rename = "卯")]
    Rabbit,
    #[serde(rename = "辰")]
    Dragon,
    #[serde(rename = "巳")]
    Snake,
    #[serde(rename = "午")]
    Horse,
    #[serde(rename = "未")]
    Goat,
    #[serde(rename = "申")]
    Monkey,
    #[serde(rename = "酉")]
    Rooster,
    #[serde(rename = "戌")]
    Dog,
    #[serde(rename = "亥")]
    Boar,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Rat,
        Branch::Ox,
        Branch::Tiger,
        Branch::Rabbit,
        Branch::Dragon,
        Branch::Snake,
        Branch::Horse,
        Branch::Goat,
        Branch::Monkey,
        Branch::Rooster,
        Branch::Dog,
        Branch::Boar,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Branch::Rat => "子",
            Branch::Ox => "丑",
            Branch::Tiger => "寅",
            Branch::Rabbit => "卯",
            Branch::Dragon => "辰",
            Branch::Snake => "巳",
            Branch::Horse => "午",
            Branch::Goat => "未",
            Branch::Monkey => "申",
            Branch::Rooster => "酉",
            Branch::Dog => "戌",
            Branch::Boar => "亥",
        }
    }

    /// Branch at a cyclic index (any integer maps into the 12-cycle)
    pub fn cycle(index: i64) -> Branch {
        Branch::ALL[index.rem_euclid(12) as usize]
    }
}

/// The sixteen temperament types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemperamentType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl TemperamentType {
    /// Build a type from the four axis outcomes
    pub fn from_axes(introverted: bool, intuitive: bool, thinking: bool, judging: bool) -> Self {
        use TemperamentType::*;
        match (introverted, intuitive, thinking, judging) {
            (true, true, true, true) => Intj,
            (true, true, true, false) => Intp,
            (true, true, false, true) => Infj,
            (true, true, false, false) => Infp,
            (true, false, true, true) => Istj,
            (true, false, true, false) => Istp,
            (true, false, false, true) => Isfj,
            (true, false, false, false) => Isfp,
            (false, true, true, true) => Entj,
            (false, true, true, false) => Entp,
            (false, true, false, true) => Enfj,
            (false, true, false, false) => Enfp,
            (false, false, true, true) => Estj,
            (false, false, true, false) => Estp,
            (false, false, false, true) => Esfj,
            (false, false, false, false) => Esfp,
        }
    }

    /// The 4-letter code, e.g. "INTJ"
    pub fn code(&self) -> &'static str {
        use TemperamentType::*;
        match self {
            Intj => "INTJ",
            Intp => "INTP",
            Entj => "ENTJ",
            Entp => "ENTP",
            Infj => "INFJ",
            Infp => "INFP",
            Enfj => "ENFJ",
            Enfp => "ENFP",
            Istj => "ISTJ",
            Isfj => "ISFJ",
            Estj => "ESTJ",
            Esfj => "ESFJ",
            Istp => "ISTP",
            Isfp => "ISFP",
            Estp => "ESTP",
            Esfp => "ESFP",
        }
    }

    pub fn is_introverted(&self) -> bool {
        self.code().starts_with('I')
    }

    pub fn is_intuitive(&self) -> bool {
        self.code().contains('N')
    }

    pub fn is_feeling(&self) -> bool {
        self.code().contains('F')
    }

    pub fn is_judging(&self) -> bool {
        self.code().contains('J')
    }
}

/// Self-reported gender; accepted by the pipeline but reserved for future
/// fragment branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// A single questionnaire answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiResponse {
    pub question_id: i32,
    pub answer: String,
}

/// Birth moment supplied by the caller; hour and minute are optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
}

/// Temperament classification result with per-axis percentage scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MbtiResult {
    #[serde(rename = "type")]
    pub temperament: TemperamentType,
    pub ie_scale: u8,
    pub ns_scale: u8,
    /// Higher values mean a stronger T preference, despite the F-first name
    pub ft_scale: u8,
    pub jp_scale: u8,
}

/// Five-element classification result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanmeiResult {
    pub element: Element,
    pub polarity: Polarity,
    pub full_type: String,
}

/// Name-stroke divination result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeimeiResult {
    pub name_total: u32,
    pub first_name_total: u32,
    pub last_name_total: u32,
    pub heaven_number: u32,
    pub earth_number: u32,
    pub human_number: u32,
    pub characteristics: Vec<String>,
    pub good_luck: String,
    pub advice: String,
}

/// Four-pillars classification result, anchored on the day pillar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FourPillarsResult {
    pub heavenly_stem: Stem,
    pub earthly_branch: Branch,
    pub day_master: Element,
    pub lucky_elements: Vec<Element>,
    pub unlucky_elements: Vec<Element>,
    pub life_theme: String,
}

/// Balance guidance section of the assembled report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceTips {
    pub energy_management: String,
    pub perfectionism: String,
}

/// Relationship guidance section of the assembled report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipTips {
    pub boundaries: String,
    pub expression: String,
    pub compatibility: String,
}

/// The full assessment output: classifier results plus the assembled
/// narrative. Created once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub mbti_result: MbtiResult,
    pub sanmei_result: SanmeiResult,
    pub type_nickname: String,
    pub overview: String,
    pub mbti_traits: Vec<String>,
    pub sanmei_traits: Vec<String>,
    pub strengths: String,
    pub challenges: String,
    pub relationships: String,
    pub career: String,
    pub balance: BalanceTips,
    pub relationship_tips: RelationshipTips,
    pub future_outlook: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sei_mei_result: Option<SeimeiResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_pillars_result: Option<FourPillarsResult>,
}
