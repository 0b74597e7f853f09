//! Five-element (算命学) classification
//!
//! Element and polarity fall out of the date-component sum: the sum modulo 5
//! indexes the element cycle, and its parity picks yin or yang.

use crate::core::{BirthDate, Element, Polarity, SanmeiResult};

/// Classify a birth date into an element and polarity
pub fn classify_sanmei(birth_date: &BirthDate) -> SanmeiResult {
    let sum = birth_date.year as i64 + birth_date.month as i64 + birth_date.day as i64;

    let element = Element::cycle(sum);
    let polarity = if sum % 2 == 0 {
        Polarity::Yin
    } else {
        Polarity::Yang
    };

    SanmeiResult {
        element,
        polarity,
        full_type: format!("{}命・{}", element.symbol(), polarity.symbol()),
    }
}
