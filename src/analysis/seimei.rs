//! Name-stroke divination (姓名判断)
//!
//! Derives the heaven, earth, and human numbers from a surname and a given
//! name, then selects fixed fortune texts by modular arithmetic over the
//! combined stroke total.

use crate::analysis::strokes::{strokes_of, total_strokes};
use crate::core::{Error, Result, SeimeiResult};

const ADVICE: [&str; 8] = [
    "安定を大切にしながらも、新しい挑戦を恐れないことで、より大きな成長が期待できます。",
    "あなたのリーダーシップを活かし、周囲の人々と共に目標に向かって進むことで、より大きな成功を収めることができるでしょう。",
    "柔軟性と適応力を大切にしながら、自分の価値観を明確にすることで、より充実した人生を歩むことができるでしょう。",
    "創造性を発揮できる場を積極的に求め、自分らしい表現方法を見つけることで、より充実した毎日を過ごせるでしょう。",
    "計画性と実行力のバランスを大切にし、着実に目標に向かって進むことで、確かな成果を上げることができるでしょう。",
    "好奇心と探究心を大切にしながら、一つのことに深く取り組む姿勢を持つことで、専門性を高めることができるでしょう。",
    "人との繋がりを大切にしながらも、自分自身の時間とエネルギーを適切に管理することで、より充実した関係性を築けるでしょう。",
    "直観と論理のバランスを取りながら、自分の内なる声に耳を傾けることで、より自分らしい選択ができるようになるでしょう。",
];

/// Fortune tier selected by the last digit of the stroke total
fn luck(total: u32) -> String {
    let text = match total % 10 {
        1 | 3 | 5 | 7 | 9 => {
            "大吉: あなたの名前の画数は非常に良い運勢を示しています。創造性、リーダーシップ、成功への道が開かれています。"
        }
        2 | 6 | 8 => {
            "中吉: あなたの名前の画数は安定した運勢を示しています。堅実さと調和がもたらされますが、時に柔軟性が必要です。"
        }
        _ => {
            "小吉: あなたの名前の画数は慎重さを要する運勢を示しています。チャレンジを乗り越えることで大きな成長が期待できます。"
        }
    };
    text.to_string()
}

/// Three characteristic sentences, selected by the total modulo 3, 5, and 7
/// in that fixed order
fn characteristics(total: u32) -> Vec<String> {
    let heaven = match total % 3 {
        0 => "直観力が鋭く、物事の本質を見抜く力がある",
        1 => "コミュニケーション能力が高く、人間関係を円滑に築ける",
        _ => "忍耐強く、困難にも粘り強く取り組める",
    };

    let earth = match total % 5 {
        0 => "社交性があり、様々な場面で適応力を発揮する",
        1 => "誠実で信頼される人柄を持っている",
        2 => "創造性豊かで、独自の視点を持っている",
        3 => "分析力に優れ、論理的な思考ができる",
        _ => "感受性が豊かで、人の気持ちを理解するのが上手",
    };

    let human = match total % 7 {
        0 => "リーダーシップがあり、周囲を導く力を持っている",
        1 | 6 => "協調性があり、チームの中で調和を生み出せる",
        2 | 5 => "独立心が強く、自分のペースで物事を進める",
        _ => "細部に気を配る几帳面さがあり、丁寧な仕事ができる",
    };

    vec![heaven.to_string(), earth.to_string(), human.to_string()]
}

/// Run name divination over a surname and given name.
///
/// Both parts must contain at least one character; the human number is built
/// from the surname's last character and the given name's first character, so
/// an empty part has no defined result.
pub fn calculate_seimei(last_name: &str, first_name: &str) -> Result<SeimeiResult> {
    let last_char = last_name
        .chars()
        .last()
        .ok_or_else(|| Error::empty_name("surname"))?;
    let first_char = first_name
        .chars()
        .next()
        .ok_or_else(|| Error::empty_name("given name"))?;

    let last_name_total = total_strokes(last_name);
    let first_name_total = total_strokes(first_name);
    let name_total = last_name_total + first_name_total;

    // Heaven is the surname total, earth the given-name total; the human
    // number joins the two characters at the boundary. The boundary lookup
    // does not range-filter, matching the totals' source rules.
    let heaven_number = last_name_total;
    let earth_number = first_name_total;
    let human_number = strokes_of(last_char) + strokes_of(first_char);

    Ok(SeimeiResult {
        name_total,
        first_name_total,
        last_name_total,
        heaven_number,
        earth_number,
        human_number,
        characteristics: characteristics(name_total),
        good_luck: luck(name_total),
        advice: ADVICE[(name_total % 8) as usize].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yamada_taro_numbers() {
        let result = calculate_seimei("山田", "太郎").unwrap();
        assert_eq!(result.heaven_number, 8); // 山(3) + 田(5)
        assert_eq!(result.earth_number, 14); // 太(4) + 郎(10)
        assert_eq!(result.name_total, 22);
        assert_eq!(result.human_number, 9); // 田(5) + 太(4)
        assert_eq!(result.last_name_total, 8);
        assert_eq!(result.first_name_total, 14);
    }

    #[test]
    fn test_always_three_characteristics() {
        for total in 0..30 {
            assert_eq!(characteristics(total).len(), 3);
        }
    }

    #[test]
    fn test_characteristic_selection_by_remainder() {
        // Heaven slot follows the total mod 3
        assert_eq!(
            characteristics(6)[0],
            "直観力が鋭く、物事の本質を見抜く力がある"
        );
        assert_eq!(
            characteristics(7)[0],
            "コミュニケーション能力が高く、人間関係を円滑に築ける"
        );

        // Earth slot follows the total mod 5
        assert_eq!(
            characteristics(22)[1],
            "創造性豊かで、独自の視点を持っている"
        );
        assert_eq!(
            characteristics(9)[1],
            "感受性が豊かで、人の気持ちを理解するのが上手"
        );

        // Human slot groups remainders 1|6 and 2|5 of 7; 3 and 4 fall through
        assert_eq!(characteristics(8)[2], characteristics(13)[2]);
        assert_eq!(characteristics(9)[2], characteristics(12)[2]);
        assert_eq!(
            characteristics(9)[2],
            "独立心が強く、自分のペースで物事を進める"
        );
        assert_eq!(
            characteristics(10)[2],
            "細部に気を配る几帳面さがあり、丁寧な仕事ができる"
        );
        assert_ne!(characteristics(9)[2], characteristics(10)[2]);
    }

    #[test]
    fn test_luck_tiers() {
        assert!(luck(21).starts_with("大吉"));
        assert!(luck(22).starts_with("中吉"));
        assert!(luck(20).starts_with("小吉"));
        assert!(luck(24).starts_with("小吉"));
    }

    #[test]
    fn test_empty_name_is_an_error() {
        assert!(matches!(
            calculate_seimei("", "太郎"),
            Err(Error::EmptyName { field: "surname" })
        ));
        assert!(matches!(
            calculate_seimei("山田", ""),
            Err(Error::EmptyName { field: "given name" })
        ));
    }

    #[test]
    fn test_advice_selected_by_total_mod_8() {
        // 山田太郎 totals 22, remainder 6
        let result = calculate_seimei("山田", "太郎").unwrap();
        assert_eq!(result.advice, ADVICE[6]);
    }
}
