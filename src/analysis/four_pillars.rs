//! Four-pillars (四柱推命) calendrical classification
//!
//! Builds the year, month, day, and hour pillars from modular offsets against
//! the 1900-01-01 epoch, then reads the day pillar as the chart's anchor: its
//! stem is the day master, whose element drives the lucky/unlucky sets and
//! the life theme. Solar-term (立春) boundaries are deliberately ignored, so
//! the chart is calendrically approximate.

use chrono::{Duration, NaiveDate};

use crate::core::{Branch, Element, FourPillarsResult, Stem};

/// Hour assumed when the caller does not supply one
pub const DEFAULT_HOUR: u32 = 12;

/// One stem/branch pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

/// Year pillar: both cycles offset by 4 from the calendar year
pub fn year_pillar(year: i32) -> Pillar {
    Pillar {
        stem: Stem::cycle(year as i64 - 4),
        branch: Branch::cycle(year as i64 - 4),
    }
}

/// Month pillar: the stem offset is shared by pairs of year stems
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let base = match year_pillar(year).stem {
        Stem::Kinoe | Stem::Tsuchinoto => 0,
        Stem::Kinoto | Stem::Kanoe => 2,
        Stem::Hinoe | Stem::Kanoto => 4,
        Stem::Hinoto | Stem::Mizunoe => 6,
        Stem::Tsuchinoe | Stem::Mizunoto => 8,
    };

    Pillar {
        stem: Stem::cycle(base + month as i64 - 1),
        branch: Branch::cycle(month as i64 + 1),
    }
}

/// Day pillar: 1900-01-01 is the 甲子 epoch
pub fn day_pillar(year: i32, month: u32, day: u32) -> Pillar {
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).expect("fixed epoch date");
    // Build from the first of the month so an out-of-range day rolls into the
    // next month instead of failing, matching the source's date arithmetic.
    let target = NaiveDate::from_ymd_opt(year, month.clamp(1, 12), 1)
        .expect("caller validates the calendar year")
        + Duration::days(day as i64 - 1);
    let day_diff = (target - epoch).num_days();

    Pillar {
        stem: Stem::cycle(day_diff),
        branch: Branch::cycle(day_diff),
    }
}

/// Hour pillar: two-hour periods indexed from the day stem; 23:00 wraps to
/// the first branch
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let period = (hour / 2) as i64;
    let branch = if hour == 23 {
        Branch::Rat
    } else {
        Branch::cycle(period)
    };

    Pillar {
        stem: Stem::cycle(day_stem.index() as i64 + period * 2),
        branch,
    }
}

/// Compatible and incompatible elements for a day master, following the
/// generative cycle (each element feeds the next) and the destructive cycle
fn element_relationships(day_master: Element) -> (Vec<Element>, Vec<Element>) {
    use Element::*;
    match day_master {
        Wood => (vec![Water, Wood, Fire], vec![Metal, Earth]),
        Fire => (vec![Wood, Fire, Earth], vec![Water, Metal]),
        Earth => (vec![Fire, Earth, Metal], vec![Wood, Water]),
        Metal => (vec![Earth, Metal, Water], vec![Fire, Wood]),
        Water => (vec![Metal, Water, Wood], vec![Earth, Fire]),
    }
}

/// Life-theme paragraph keyed by the day master stem
fn life_theme(day_master: Stem) -> String {
    let text = match day_master {
        Stem::Kinoe => {
            "創造性と先駆性：新しいことを始め、道を切り開くことに強みがあります。リーダーシップと独創性を発揮できる場所で活躍できるでしょう。"
        }
        Stem::Kinoto => {
            "柔軟性と適応力：直感力と繊細な感覚を持ち、状況に適応する能力に優れています。芸術や人間関係の分野で才能を発揮できるでしょう。"
        }
        Stem::Hinoe => {
            "情熱と影響力：明るく積極的なエネルギーを持ち、人々を鼓舞する力があります。人前に立つ仕事や創造的な分野で力を発揮できるでしょう。"
        }
        Stem::Hinoto => {
            "優しさと思いやり：繊細な感情と深い共感力を持ち、人々のケアや支援に関わる分野で才能を発揮できるでしょう。"
        }
        Stem::Tsuchinoe => {
            "安定性と信頼：誠実で堅実な性格を持ち、長期的な視点で物事を考えることができます。組織の中核として安定をもたらす役割に適しています。"
        }
        Stem::Tsuchinoto => {
            "内省と理解：深い洞察力と分析力を持ち、複雑な情報を整理して理解する能力に優れています。知識や情報を扱う分野で才能を発揮できるでしょう。"
        }
        Stem::Kanoe => {
            "決断力と実行力：明確な判断と行動力を持ち、効率的に目標を達成することができます。管理や実践的な分野で力を発揮できるでしょう。"
        }
        Stem::Kanoto => {
            "洗練と審美眼：繊細な感覚と美的センスを持ち、物事を洗練させる能力に優れています。芸術やデザイン、人間関係の調和を生み出す分野に適しています。"
        }
        Stem::Mizunoe => {
            "革新と知恵：知的好奇心と先見性を持ち、新しい知識や技術を探求することに長けています。科学や哲学、革新的な分野で才能を発揮できるでしょう。"
        }
        Stem::Mizunoto => {
            "直感と感受性：鋭い直感と豊かな感受性を持ち、目に見えない世界とのつながりを感じることができます。芸術や癒し、人々の内面的成長を支援する分野に適しています。"
        }
    };
    text.to_string()
}

/// Compute the four-pillars chart and surface the day-pillar reading.
///
/// All four pillars are derived, but the result exposes only the day pillar's
/// stem and branch alongside the day-master element and its relationships.
pub fn calculate_four_pillars(
    year: i32,
    month: u32,
    day: u32,
    hour: Option<u32>,
) -> FourPillarsResult {
    let hour = hour.unwrap_or(DEFAULT_HOUR);

    let day_pillar = day_pillar(year, month, day);
    let _hour_pillar = hour_pillar(day_pillar.stem, hour);

    let day_master = day_pillar.stem;
    let day_master_element = day_master.element();
    let (lucky_elements, unlucky_elements) = element_relationships(day_master_element);

    FourPillarsResult {
        heavenly_stem: day_master,
        earthly_branch: day_pillar.branch,
        day_master: day_master_element,
        lucky_elements,
        unlucky_elements,
        life_theme: life_theme(day_master),
    }
}
