//! Report assembly
//!
//! Pure lookup-and-concatenate over the fragment tables: each field branches
//! on one or two coarse predicates over the temperament type, element, and
//! polarity, then joins a handful of fixed fragments. Name-divination and
//! four-pillars results are echoed into the aggregate unchanged; they never
//! feed the narrative text.

pub mod fragments;

use crate::core::{
    AnalysisResult, BalanceTips, Element, FourPillarsResult, Gender, MbtiResult, Polarity,
    RelationshipTips, SanmeiResult, SeimeiResult, TemperamentType,
};

/// Assemble the full narrative result from the classifier outputs.
///
/// Gender is accepted for future fragment branching but does not affect any
/// current selection.
pub fn assemble(
    mbti: MbtiResult,
    sanmei: SanmeiResult,
    _gender: Gender,
    seimei: Option<SeimeiResult>,
    four_pillars: Option<FourPillarsResult>,
) -> AnalysisResult {
    let t = mbti.temperament;
    let element = sanmei.element;
    let polarity = sanmei.polarity;

    AnalysisResult {
        type_nickname: fragments::nickname(t),
        overview: overview(t, element, polarity),
        mbti_traits: fragments::mbti_traits(t),
        sanmei_traits: fragments::sanmei_traits(element, polarity),
        strengths: strengths(t, element),
        challenges: challenges(t, element),
        relationships: relationships(t, element),
        career: career(t, element),
        balance: BalanceTips {
            energy_management: energy_management(t, element),
            perfectionism: perfectionism(t, element),
        },
        relationship_tips: RelationshipTips {
            boundaries: boundaries(t, element),
            expression: expression(t),
            compatibility: compatibility(),
        },
        future_outlook: future_outlook(t, element),
        mbti_result: mbti,
        sanmei_result: sanmei,
        sei_mei_result: seimei,
        four_pillars_result: four_pillars,
    }
}

/// Three paragraphs joined by blank lines: temperament, five-element, and the
/// combined reading
fn overview(t: TemperamentType, element: Element, polarity: Polarity) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        fragments::mbti_overview(t),
        fragments::sanmei_overview(element, polarity),
        combined_overview(t, element, polarity)
    )
}

fn combined_overview(t: TemperamentType, element: Element, polarity: Polarity) -> String {
    let mut insight = String::from("二つの体系から見るあなたの最も際立った特徴は、");

    // Energy direction: introversion aligned with yin reads differently from
    // a mixed pairing
    let aligned = t.is_introverted() == polarity.is_yin();
    insight.push_str(match (aligned, t.is_introverted()) {
        (true, true) => {
            "「静かな内省力」と「深い内面的理解」です。表面的な社交よりも、一人一人との深い関わりを大切にし、"
        }
        (true, false) => "「活発な表現力」と「外向的なエネルギー」です。多くの人々との交流を通じて、",
        (false, true) => {
            "「内省的な思考」と「外向的なエネルギーのバランス」です。状況に応じて内向と外向の特性を切り替え、"
        }
        (false, false) => {
            "「社交的な表現」と「内面的な深さのバランス」です。人々との交流を楽しみながらも内面に深い思考を持ち、"
        }
    });

    insight.push_str(match element {
        Element::Wood => {
            if t.is_intuitive() {
                "成長と可能性を見出す直感力に優れています。"
            } else {
                "実際的な成長と発展を重視します。"
            }
        }
        Element::Fire => {
            if t.is_feeling() {
                "情熱的な感情表現と人間関係の暖かさを大切にします。"
            } else {
                "創造的なビジョンと明確な表現力を持っています。"
            }
        }
        Element::Earth => {
            if t.is_judging() {
                "安定と秩序を重視する傾向があります。"
            } else {
                "実用的でありながらも柔軟性を持っています。"
            }
        }
        Element::Metal => {
            if t.is_feeling() {
                "原則を重んじながらも人間関係の価値を理解しています。"
            } else {
                "論理的な分析と明確な基準に基づく判断を好みます。"
            }
        }
        Element::Water => {
            if t.is_intuitive() {
                "深い洞察力と直感的な理解力を持っています。"
            } else {
                "状況に適応しながら実際的な知恵を活かします。"
            }
        }
    });

    insight.push_str("他者の成長や幸福に貢献することに喜びを見出します。");
    insight
}

fn strengths(t: TemperamentType, element: Element) -> String {
    let mbti_strengths = match (t.is_introverted(), t.is_intuitive()) {
        (true, true) => "直感力と洞察力",
        (true, false) => "注意深い観察力と実用的な思考",
        (false, true) => "創造的な視野と可能性への探求心",
        (false, false) => "現実的な問題解決能力と実行力",
    };

    let element_strengths = match element {
        Element::Wood => "算命学の木命としての柔軟性と成長志向",
        Element::Fire => "算命学の火命としての情熱と創造的エネルギー",
        Element::Earth => "算命学の土命としての安定性と信頼性",
        Element::Metal => "算命学の金命としての精密さと決断力",
        Element::Water => "算命学の水命としての適応力と深い洞察力",
    };

    let is_wood_or_water = matches!(element, Element::Wood | Element::Water);
    let is_metal_or_fire = matches!(element, Element::Metal | Element::Fire);
    let is_earth_or_metal = matches!(element, Element::Earth | Element::Metal);
    let is_wood_or_fire = matches!(element, Element::Wood | Element::Fire);

    let combined = if t.is_feeling() && is_wood_or_water {
        "人間関係や組織内で「静かなる改革者」として機能することができます。"
    } else if !t.is_feeling() && is_metal_or_fire {
        "戦略的思考と実行力を兼ね備えた「実践的な戦略家」として力を発揮できます。"
    } else if t.is_judging() && is_earth_or_metal {
        "組織と構造を重視する「信頼できる基盤構築者」としての役割を果たせます。"
    } else if !t.is_judging() && is_wood_or_fire {
        "創造的で柔軟な「革新的な触媒」として環境に適応しながら新たな可能性を開拓できます。"
    } else {
        "多面的な視点と独自のアプローチで問題に取り組む能力に優れています。"
    };

    format!(
        "MBTIの{}としての{}、{}が組み合わさり、あなたは{}複雑な状況を理解し、長期的なビジョンに基づいて行動する能力に優れています。",
        t.code(),
        mbti_strengths,
        element_strengths,
        combined
    )
}

fn challenges(t: TemperamentType, element: Element) -> String {
    let mut mbti_challenges = String::from(if t.is_introverted() {
        "内向的な性質"
    } else {
        "外向的なエネルギーの管理"
    });
    mbti_challenges.push_str(if t.is_intuitive() {
        "と理想主義的な傾向"
    } else {
        "と実用主義的な焦り"
    });

    let element_challenges = match element {
        Element::Wood => "成長への強い欲求が時に周囲との摩擦を生じさせることがあります",
        Element::Fire => "情熱的な性質がバーンアウトにつながる可能性があります",
        Element::Earth => "安定を求めるあまり変化に抵抗してしまうことがあります",
        Element::Metal => "高い基準を持つことが完璧主義につながることがあります",
        Element::Water => "適応性が高いがゆえに自分の立場を見失うことがあります",
    };

    // Every type carries either J or P, so the J/P pair decides the advice
    let growth_advice = if t.is_judging() {
        "「完璧でなくても良い」という考え方を受け入れること"
    } else {
        "焦点を絞り、行動に移すための明確な優先順位をつけること"
    };

    format!(
        "{}から、時に現実とのギャップにストレスを感じることがあります。また、{}。他者のニーズに敏感なあまり、自分自身のニーズを後回しにしてしまう傾向も見られます。自分の限界を認識し、{}が成長への鍵となります。",
        mbti_challenges, element_challenges, growth_advice
    )
}

fn relationships(t: TemperamentType, element: Element) -> String {
    let style = if t.is_introverted() {
        "少数の深い関係を好み、表面的な交流よりも意味のある会話や共有体験を重視します。"
    } else {
        "広い人間関係のネットワークを持ち、様々な人々との交流から刺激を受ける傾向があります。"
    };

    let element_influence = match element {
        Element::Wood => "木命の特性として、周囲に良い影響を与えながら自身も成長する関係性を自然と構築しています。",
        Element::Fire => "火命の特性として、温かさと情熱をもって人間関係に活力をもたらします。",
        Element::Earth => "土命の特性として、安定感と信頼性をもって周囲の人々を支える役割を担うことが多いです。",
        Element::Metal => "金命の特性として、誠実さと明確なコミュニケーションで信頼関係を構築します。",
        Element::Water => "水命の特性として、深い理解と柔軟な受容性で多様な人々との関係を育みます。",
    };

    let empathic = t.is_feeling() || matches!(element, Element::Water | Element::Wood);
    let emotional_note = if empathic {
        "共感力が高いため、時に他者の問題を自分のことのように感じてしまうこともあります。"
    } else {
        "論理的な思考を大切にしながらも、重要な関係では感情的なつながりも大切にします。"
    };

    format!("{style}{element_influence}{emotional_note}")
}

fn career(t: TemperamentType, element: Element) -> String {
    let preferences = match (t.is_intuitive(), t.is_feeling()) {
        (true, true) => "人の成長や発展に関わる職業、創造的な問題解決が求められる分野、社会的な意義のある仕事",
        (true, false) => "戦略的な計画立案、複雑な問題の分析、革新的なシステム設計が求められる分野",
        (false, true) => "実用的なケアやサポート、対人サービス、コミュニティの調和を促進する分野",
        (false, false) => "実務的な管理運営、効率的なシステムの実装、具体的な問題解決が求められる分野",
    };

    let element_influence = match element {
        Element::Wood => "成長や発展に関連する仕事、教育、コーチング、環境関連の分野",
        Element::Fire => "創造性、表現、リーダーシップ、革新的なプロジェクトに関連する分野",
        Element::Earth => "安定とサポートを提供する役割、不動産、農業、組織基盤に関連する分野",
        Element::Metal => "精密さと明確さが求められる分野、財務、法律、品質管理、構造化されたシステム",
        Element::Water => "流動的思考と適応力が活かせる分野、研究、カウンセリング、芸術、医療",
    };

    use TemperamentType::*;
    let specific_roles = match t {
        Infj | Enfj => {
            "具体的には、カウンセラー、教育者、ライター、芸術家、非営利団体での活動などが考えられます。"
        }
        Intj | Entj => {
            "具体的には、戦略コンサルタント、研究者、システム設計者、企業家、プロジェクトマネージャーなどが考えられます。"
        }
        Isfj | Esfj => {
            "具体的には、医療従事者、ソーシャルワーカー、教師、顧客サービス、コミュニティサポートなどが考えられます。"
        }
        Istj | Estj => {
            "具体的には、財務管理者、法律専門家、プロジェクト管理者、運営責任者などが考えられます。"
        }
        _ => "具体的には、あなたの多面的なスキルを活かせる分野で、個性と才能が評価される環境が最適でしょう。",
    };

    let org_role = if t.is_introverted() {
        "組織内では、深い分析と洞察を提供し、背後から支える役割が得意です。"
    } else {
        "組織内では、ビジョンを示し、人々をつなぐ役割が得意です。"
    };

    format!(
        "{}に適性があります。また、{}も相性が良いでしょう。{}{}",
        preferences, element_influence, specific_roles, org_role
    )
}

fn energy_management(t: TemperamentType, element: Element) -> String {
    if t.is_introverted() {
        let refresh = match element {
            Element::Wood => {
                "自然の中で過ごす時間は、木命の特性を活かした効果的なリフレッシュ方法になります。"
            }
            Element::Water => {
                "水辺で過ごしたり、瞑想したりすることで、水命の特性を活かしたリフレッシュが可能です。"
            }
            _ => "静かな環境で内省する時間を持つことで、エネルギーを回復できます。",
        };
        format!("内向型として、社交的な活動の後には一人の時間を意識的に確保しましょう。{refresh}")
    } else {
        let caution = match element {
            Element::Fire => {
                "火命の特性から時に燃え尽きることがあります。情熱を持続させるために意識的な休息を取り入れましょう。"
            }
            Element::Wood => {
                "木命の特性から成長と活動を求め過ぎることがあります。時には自然の中でゆっくり過ごす時間も大切にしましょう。"
            }
            _ => "活動と休息のバランスを意識的に取ることが大切です。",
        };
        format!("外向型として、他者との交流からエネルギーを得る一方で、{caution}")
    }
}

fn perfectionism(t: TemperamentType, element: Element) -> String {
    let text = if t.is_judging() || matches!(element, Element::Metal | Element::Wood) {
        "高い理想を持つことは素晴らしいですが、すべてを完璧にしようとするストレスから自分を守ることも大切です。小さな成功を認め、祝うことを習慣にしましょう。"
    } else {
        "柔軟性を持つことは強みですが、時に焦点が定まらなくなることがあります。重要なプロジェクトでは、何が「十分に良い」かを定義し、行動に移すことを意識しましょう。"
    };
    text.to_string()
}

fn boundaries(t: TemperamentType, element: Element) -> String {
    let text = if t.is_feeling() || matches!(element, Element::Water | Element::Wood) {
        "共感力が高いあなたは、時に他者の感情に圧倒されることがあります。健全な境界線を設けることを学びましょう。"
    } else {
        "論理的思考を重視するあなたは、時に感情的なニーズを見逃すことがあります。自分と他者の感情的境界にも注意を払いましょう。"
    };
    text.to_string()
}

fn expression(t: TemperamentType) -> String {
    let text = if t.is_introverted() {
        "内面に豊かな思考を持っていても、それを言葉にして共有しないと他者には伝わりません。あなたの洞察は多くの人の助けになります。"
    } else {
        "自然な表現力を持つあなたですが、時に他者が内省や処理の時間を必要とすることを忘れないでください。重要な会話では相手の反応を見ながら進めることが効果的です。"
    };
    text.to_string()
}

fn compatibility() -> String {
    "すべての関係に同じエネルギーを注ぐのではなく、相互成長できる関係に意識的に時間を投資しましょう。".to_string()
}

fn future_outlook(t: TemperamentType, element: Element) -> String {
    let element_outlook = match element {
        Element::Wood => "あなたの木命としての性質は、時間をかけて着実に成長するというプロセスと調和しています。",
        Element::Fire => "あなたの火命としての性質は、情熱と創造力を通じて新たな可能性を照らし出すことと調和しています。",
        Element::Earth => "あなたの土命としての性質は、安定した基盤を築きながら、着実に前進するプロセスと調和しています。",
        Element::Metal => "あなたの金命としての性質は、明確な基準と精密さを持って価値あるものを選び取るプロセスと調和しています。",
        Element::Water => "あなたの水命としての性質は、柔軟に状況に適応しながら、深い知恵を育むプロセスと調和しています。",
    };

    let mbti_outlook = if t.is_intuitive() {
        "MBTIの直感力と組み合わさることで、将来の可能性を見通しながら、今の自分に必要な成長のステップを選ぶ力を持っています。"
    } else {
        "MBTIの現実的な視点と組み合わさることで、具体的な一歩一歩を着実に進みながら、確かな未来を築く力を持っています。"
    };

    format!("{element_outlook}{mbti_outlook}焦らず、自分のペースで進むことを忘れないでください。")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mbti(t: TemperamentType) -> MbtiResult {
        MbtiResult {
            temperament: t,
            ie_scale: 60,
            ns_scale: 60,
            ft_scale: 60,
            jp_scale: 60,
        }
    }

    fn sanmei(element: Element, polarity: Polarity) -> SanmeiResult {
        SanmeiResult {
            element,
            polarity,
            full_type: format!("{}命・{}", element.symbol(), polarity.symbol()),
        }
    }

    #[test]
    fn test_overview_has_three_paragraphs() {
        let result = assemble(
            mbti(TemperamentType::Intj),
            sanmei(Element::Earth, Polarity::Yin),
            Gender::Other,
            None,
            None,
        );
        assert_eq!(result.overview.split("\n\n").count(), 3);
    }

    #[test]
    fn test_nickname_matches_type() {
        let result = assemble(
            mbti(TemperamentType::Intj),
            sanmei(Element::Earth, Polarity::Yin),
            Gender::Male,
            None,
            None,
        );
        assert_eq!(result.type_nickname, "「建築家・戦略家」");
        assert_eq!(result.mbti_traits.len(), 4);
        assert_eq!(result.sanmei_traits.len(), 5);
    }

    #[test]
    fn test_sanmei_traits_polarity_line() {
        let yin = fragments::sanmei_traits(Element::Water, Polarity::Yin);
        let yang = fragments::sanmei_traits(Element::Water, Polarity::Yang);
        assert_eq!(yin[..4], yang[..4]);
        assert_eq!(yin[4], "内面的な表現と静かな強さを持つ");
        assert_eq!(yang[4], "外向的な表現と積極的なエネルギーを持つ");
    }

    #[test]
    fn test_combined_overview_alignment_branches() {
        let aligned = combined_overview(TemperamentType::Intj, Element::Earth, Polarity::Yin);
        assert!(aligned.contains("静かな内省力"));

        let mixed = combined_overview(TemperamentType::Intj, Element::Earth, Polarity::Yang);
        assert!(mixed.contains("内省的な思考"));

        let outgoing = combined_overview(TemperamentType::Esfp, Element::Earth, Polarity::Yang);
        assert!(outgoing.contains("活発な表現力"));
    }

    #[test]
    fn test_strengths_combined_branch_order() {
        // Feeling + wood wins the first branch
        let text = strengths(TemperamentType::Infp, Element::Wood);
        assert!(text.contains("静かなる改革者"));

        // Thinking + metal takes the strategist branch
        let text = strengths(TemperamentType::Intj, Element::Metal);
        assert!(text.contains("実践的な戦略家"));

        // Judging + earth takes the foundation branch
        let text = strengths(TemperamentType::Isfj, Element::Earth);
        assert!(text.contains("信頼できる基盤構築者"));

        // Perceiving thinker with earth falls through to the generic line
        let text = strengths(TemperamentType::Istp, Element::Earth);
        assert!(text.contains("多面的な視点"));
    }

    #[test]
    fn test_career_specific_roles() {
        assert!(career(TemperamentType::Enfj, Element::Fire).contains("カウンセラー"));
        assert!(career(TemperamentType::Entj, Element::Fire).contains("戦略コンサルタント"));
        assert!(career(TemperamentType::Estp, Element::Fire).contains("多面的なスキル"));
    }

    #[test]
    fn test_optional_results_echoed_verbatim() {
        let four_pillars = crate::analysis::calculate_four_pillars(2000, 1, 1, Some(0));
        let result = assemble(
            mbti(TemperamentType::Intj),
            sanmei(Element::Earth, Polarity::Yin),
            Gender::Female,
            None,
            Some(four_pillars.clone()),
        );
        assert_eq!(result.four_pillars_result, Some(four_pillars));
        assert!(result.sei_mei_result.is_none());
    }
}
