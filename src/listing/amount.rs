/// 금액 필드 역직렬화
/// 입찰 서버는 금액을 숫자 또는 "$50.00", "55.00" 같은 문자열로 보낸다.
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn parse_text(text: &str) -> Option<f64> {
    text.trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(t) => parse_text(&t)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {t:?}"))),
    }
}

pub fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(t)) => parse_text(&t)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {t:?}"))),
    }
}

/// 표시용 문자열 (숫자면 그대로 문자열로 변환)
pub fn optional_display<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumberOrText>::deserialize(deserializer)?.map(|value| match value {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(t) => t,
        }),
    )
}
