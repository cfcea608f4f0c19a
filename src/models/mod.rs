use chrono::NaiveDate;
use serde::{Serialize, Deserialize};

/// A tennis player record as stored in the `players` table.
///
/// `id == 0` means the record has not been persisted yet; the store assigns
/// a fresh id on insert. No field is validated, null values are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub nationality: Option<String>,
    #[serde(default, with = "birth_date_format")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub titles: i64,
}

/// Serde adapter for the `dd-MM-yyyy` wire pattern on `birthDate`.
mod birth_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d-%m-%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn birth_date_uses_day_month_year_pattern() {
        let player = Player {
            id: 1,
            name: Some("Rafael Nadal".to_string()),
            nationality: Some("ES".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1986, 6, 3),
            titles: 22,
        };

        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["birthDate"], "03-06-1986");

        let back: Player = serde_json::from_value(json).unwrap();
        assert_eq!(back, player);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let player: Player = serde_json::from_str(r#"{"name": "Ash Barty"}"#).unwrap();
        assert_eq!(player.id, 0);
        assert_eq!(player.nationality, None);
        assert_eq!(player.birth_date, None);
        assert_eq!(player.titles, 0);
    }
}
