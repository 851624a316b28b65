use crate::dtos::offer::FormattedOffer;
use crate::entities::offer::Offer;

const PRESENCIAL: &str = "presencial";

impl Offer {
    pub fn to_formatted_offer(&self) -> FormattedOffer {
        FormattedOffer {
            course_name: self.course_name.clone(),
            rating: self.rating,
            full_price: format_currency(self.full_price),
            offered_price: format_currency(self.offered_price),
            discount: discount_label(self.full_price, self.offered_price),
            kind: kind_label(&self.kind).to_string(),
            level: level_label(&self.level),
            ies_logo: self.ies_logo.clone(),
            ies_name: self.ies_name.clone(),
        }
    }
}

pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_nan() {
        return "R$\u{a0}NaN".to_string();
    }
    if value.is_infinite() {
        return format!("{}R$\u{a0}∞", sign);
    }
    let (units, cents) = round_to_cents(value.abs());
    format!("{}R$\u{a0}{},{}", sign, group_thousands(&units), cents)
}

// Rounds half away from zero on the shortest decimal form, so 1.005 is 1,01.
fn round_to_cents(value: f64) -> (String, String) {
    let text = value.to_string();
    let (units, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut digits: Vec<u8> = units.bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|digit| digit - b'0')
        .collect();
    if fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        let mut position = digits.len();
        loop {
            if position == 0 {
                digits.insert(0, 1);
                break;
            }
            position -= 1;
            if digits[position] == 9 {
                digits[position] = 0;
            } else {
                digits[position] += 1;
                break;
            }
        }
    }
    let rounded: String = digits.iter().map(|digit| char::from(b'0' + digit)).collect();
    let (units, cents) = rounded.split_at(rounded.len() - 2);
    (units.to_string(), cents.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn kind_label(kind: &str) -> &'static str {
    if kind == PRESENCIAL {
        "Presencial 🏫"
    } else {
        "EaD 🏠"
    }
}

pub fn level_label(level: &str) -> String {
    match level {
        "bacharelado" => "Graduação (bacharelado) 🎓".to_string(),
        "tecnologo" => "Graduação (tecnólogo) 🎓".to_string(),
        "licenciatura" => "Graduação (licenciatura) 🎓".to_string(),
        other => other.to_string(),
    }
}

pub fn discount_label(full_price: f64, offered_price: f64) -> String {
    let ratio = (full_price - offered_price) / full_price * 100.0;
    let percent = if ratio.is_finite() {
        // halves round toward positive infinity
        (ratio + 0.5).floor() as i64
    } else {
        0
    };
    format!("{}% 📉", percent)
}
