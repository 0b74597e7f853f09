//! Fixed fragment tables keyed by temperament type, element, and polarity
//!
//! Every table is an exhaustive match over a closed enum, so there are no
//! fallback entries: a value outside these tables cannot be constructed.

use crate::core::{Element, Polarity, TemperamentType};

/// Type nickname, e.g. 「建築家・戦略家」 for INTJ
pub fn nickname(t: TemperamentType) -> String {
    use TemperamentType::*;
    let text = match t {
        Intj => "「建築家・戦略家」",
        Intp => "「論理学者・思想家」",
        Entj => "「指揮官・統率者」",
        Entp => "「討論者・発明家」",
        Infj => "「提唱者・神秘的な理想主義者」",
        Infp => "「仲介者・理想主義的な癒し手」",
        Enfj => "「主人公・教師」",
        Enfp => "「広報運動家・チャンピオン」",
        Istj => "「管理者・義務遂行者」",
        Isfj => "「擁護者・防衛者」",
        Estj => "「幹部・監督者」",
        Esfj => "「領事・提供者」",
        Istp => "「巨匠・職人」",
        Isfp => "「冒険家・芸術家」",
        Estp => "「起業家・実行者」",
        Esfp => "「エンターテイナー・パフォーマー」",
    };
    text.to_string()
}

/// Four trait lines per temperament type
pub fn mbti_traits(t: TemperamentType) -> Vec<String> {
    use TemperamentType::*;
    let traits: [&str; 4] = match t {
        Intj => [
            "戦略的思考と長期計画に優れている",
            "独立心が強く、自己主導的",
            "合理的な意思決定と問題解決能力が高い",
            "高い基準と完璧主義の傾向がある",
        ],
        Intp => [
            "論理的思考と分析に優れている",
            "新しい概念やアイデアに関心を持つ",
            "知的好奇心が強い",
            "独創的な問題解決アプローチを持つ",
        ],
        Entj => [
            "リーダーシップと決断力がある",
            "効率性と生産性を重視する",
            "戦略的思考と計画立案に長けている",
            "直接的でオープンなコミュニケーションスタイル",
        ],
        Entp => [
            "創造的思考と革新性がある",
            "議論や知的な対話を楽しむ",
            "多様なアイデアや可能性を探求する",
            "従来の方法や規則に挑戦する",
        ],
        Infj => [
            "人々の感情や動機を直感的に理解する",
            "理想主義的で目標達成に向けて粘り強い",
            "深い洞察力と創造性を持つ",
            "他者との意味のある関係を重視する",
        ],
        Infp => [
            "強い個人的価値観と倫理観を持つ",
            "他者への共感力と理解力が高い",
            "創造的で芸術的な表現に惹かれる",
            "他者との調和と真正性を重視する",
        ],
        Enfj => [
            "他者の成長と発展を支援することに情熱的",
            "カリスマ性とリーダーシップがある",
            "優れたコミュニケーション能力がある",
            "人間関係と社会的な調和を重視する",
        ],
        Enfp => [
            "熱意と創造性に溢れている",
            "新しい可能性や考え方に開かれている",
            "優れた人間関係スキルを持つ",
            "自由と自己表現を重視する",
        ],
        Istj => [
            "責任感が強く信頼できる",
            "秩序だったアプローチで体系的に問題を解決する",
            "事実と詳細に注意を払う",
            "伝統と安定性を重視する",
        ],
        Isfj => [
            "思いやりがあり、他者のニーズに注意深い",
            "責任感と信頼性が高い",
            "実用的で秩序だったアプローチを好む",
            "安定性と調和を重視する",
        ],
        Estj => [
            "効率的で体系的な問題解決能力がある",
            "責任感が強く、義務を重視する",
            "明確な構造とガイドラインを好む",
            "直接的で実用的なコミュニケーションスタイル",
        ],
        Esfj => [
            "他者の福祉と調和に気を配る",
            "協力的で社交的",
            "組織と秩序に価値を置く",
            "責任感と義務感が強い",
        ],
        Istp => [
            "問題解決に対する実用的なアプローチを持つ",
            "危機的状況で冷静さを保つ",
            "手先の器用さと技術的スキルに長けている",
            "自律性と柔軟性を重視する",
        ],
        Isfp => [
            "芸術的感性と美的センスがある",
            "思いやりがあり、他者の気持ちに敏感",
            "現在の瞬間を楽しむ能力がある",
            "自由と個人的な表現を重視する",
        ],
        Estp => [
            "行動志向で冒険を楽しむ",
            "状況に素早く適応し、問題解決能力が高い",
            "現実的で実用的なアプローチを好む",
            "社交的でエネルギッシュ",
        ],
        Esfp => [
            "社交的でエネルギッシュ",
            "人々と交流し、楽しい雰囲気を作り出す",
            "現在の瞬間を楽しむ",
            "柔軟性と適応力がある",
        ],
    };
    traits.iter().map(|s| s.to_string()).collect()
}

/// Element traits plus a fifth line adjusted by polarity
pub fn sanmei_traits(element: Element, polarity: Polarity) -> Vec<String> {
    use Element::*;
    let base: [&str; 4] = match element {
        Wood => [
            "成長と発展を好み、理想を追求する",
            "柔軟で順応性がある一方、内面に強い意志を持つ",
            "自然や環境との調和を重視する",
            "進歩的で未来志向の思考を持つ",
        ],
        Fire => [
            "情熱的でエネルギッシュな性質を持つ",
            "直感的な判断と決断力がある",
            "表現力と創造性に富む",
            "人々を鼓舞し、活気をもたらす",
        ],
        Earth => [
            "安定性と信頼性を重視する",
            "実用的で現実的な思考を持つ",
            "誠実で思いやりがある",
            "伝統と家族の価値を大切にする",
        ],
        Metal => [
            "整然とした思考と分析力を持つ",
            "正確さと完璧さを追求する",
            "原則と規律を重んじる",
            "強い意志と断固とした態度を持つ",
        ],
        Water => [
            "柔軟で適応力があり、流れに従う",
            "深い知恵と直感力を持つ",
            "内省的で哲学的な思考を好む",
            "感情的な深さと洞察力がある",
        ],
    };

    let polarity_line = if polarity.is_yin() {
        "内面的な表現と静かな強さを持つ"
    } else {
        "外向的な表現と積極的なエネルギーを持つ"
    };

    base.iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(polarity_line.to_string()))
        .collect()
}

/// Temperament paragraph of the overview
pub fn mbti_overview(t: TemperamentType) -> String {
    use TemperamentType::*;
    let text = match t {
        Intj => "あなたは分析的で戦略的な思考を持ち、世界を理解し改善するための体系的なアプローチを好みます。独立心が強く、効率性を重視する傾向があります。",
        Intp => "あなたは論理的で理論的な思考を持ち、概念や原理を理解することに情熱を持っています。新しいアイデアや可能性を探求することを楽しむ傾向があります。",
        Entj => "あなたは決断力とリーダーシップを持ち、効率的な方法で目標を達成することに情熱を持っています。論理的な思考と計画性に優れています。",
        Entp => "あなたは革新的で知的好奇心が強く、新しいアイデアを生み出し、議論することを楽しみます。様々な可能性を探求し、従来の枠組みに挑戦する傾向があります。",
        Infj => "あなたは内省的で直感的な性格を持ち、社会や周囲の人々のために何かを成し遂げたいという強い使命感を抱いています。深い洞察力と理想主義的な側面を持っています。",
        Infp => "あなたは理想主義的で共感力が高く、自分の価値観や信念に基づいた真正性のある生き方を求めています。創造性と人間の可能性を信じる傾向があります。",
        Enfj => "あなたはカリスマ性と思いやりを持ち、他者の成長や発展をサポートすることに喜びを見出します。社会的な調和と意義のある関係を重視します。",
        Enfp => "あなたは熱意と創造性に溢れ、新しい可能性や人との繋がりを求める傾向があります。自由な表現と人間の潜在能力を引き出すことに情熱を持っています。",
        Istj => "あなたは責任感が強く、秩序と体系を重視します。事実と詳細に注意を払い、義務を果たすことに価値を見出す傾向があります。",
        Isfj => "あなたは思いやりがあり、責任感が強く、他者のニーズに敏感です。実用的なサポートと伝統的な価値観を大切にする傾向があります。",
        Estj => "あなたは実務的でリーダーシップがあり、効率と秩序を重視します。明確な構造とルールに基づいて行動し、責任を果たすことを重んじます。",
        Esfj => "あなたは協力的で社交的であり、周囲との調和と他者のケアを重視します。伝統的な価値観と人間関係の中で安定を求める傾向があります。",
        Istp => "あなたは実践的で論理的な問題解決者であり、具体的な事実や経験から学ぶことを好みます。自律性と柔軟性を持ち、危機的状況でも冷静さを保つ能力があります。",
        Isfp => "あなたは感受性が強く、芸術的な表現を通じて自分の個性を示す傾向があります。現在の瞬間を大切にし、自由と美を追求します。",
        Estp => "あなたは行動志向で、現実的な問題解決に優れています。冒険を楽しみ、状況に素早く適応できる柔軟性を持っています。",
        Esfp => "あなたは社交的で spontaneous であり、現在の瞬間を楽しむことを重視します。他者と共に楽しい経験を創り出すことに喜びを感じる傾向があります。",
    };
    text.to_string()
}

/// Five-element paragraph of the overview, with the element and polarity
/// symbols interpolated into the template
pub fn sanmei_overview(element: Element, polarity: Polarity) -> String {
    use Element::*;
    let lead = format!(
        "算命学の「{}命・{}」の特性として、",
        element.symbol(),
        polarity.symbol()
    );

    let body = match element {
        Wood => {
            if polarity.is_yin() {
                "穏やかながらも芯の強さを持ち"
            } else {
                "活発で成長力があり"
            }
        }
        Fire => {
            if polarity.is_yin() {
                "内面に熱い情熱を秘めながらも控えめに表現し"
            } else {
                "明るく活発なエネルギーを外に表現し"
            }
        }
        Earth => {
            if polarity.is_yin() {
                "内面に安定した基盤を持ち、穏やかに周囲をサポートする"
            } else {
                "実用的で頼りになる存在として、積極的に周囲を支える"
            }
        }
        Metal => {
            if polarity.is_yin() {
                "内面に強い意志と原則を持ちながらも控えめに表現する"
            } else {
                "明確な基準と決断力を持ち、それを外に表現する"
            }
        }
        Water => {
            if polarity.is_yin() {
                "内面に深い知恵と直感力を持ちながらも静かに流れる"
            } else {
                "柔軟に適応しながらも強い直感力で道を切り開く"
            }
        }
    };

    let tail = match element {
        Wood => "、自分の信念に従って着実に成長する傾向があります。自然界の樹木のように、柔軟さと強さを兼ね備え、環境との調和を大切にします。",
        Fire => "、周囲に活力と温かさをもたらします。創造的なビジョンと直感力に優れています。",
        Earth => "傾向があります。信頼性と実用性を重視し、伝統的な価値観を大切にします。",
        Metal => "傾向があります。精密さと完璧さを追求し、原則に基づいた行動を取ります。",
        Water => "傾向があります。深い洞察力と適応力を持ち、状況の流れを読む能力に優れています。",
    };

    format!("{lead}{body}{tail}")
}
