use serde::{Deserialize, Serialize};

/// Names one of the six derived results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultKey {
    Original,
    P11,
    P16,
    P5,
    Minus5,
    Plus10,
}

impl ResultKey {
    pub const ALL: [ResultKey; 6] = [
        ResultKey::Original,
        ResultKey::P11,
        ResultKey::P16,
        ResultKey::P5,
        ResultKey::Minus5,
        ResultKey::Plus10,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKey::Original => "original",
            ResultKey::P11 => "p11",
            ResultKey::P16 => "p16",
            ResultKey::P5 => "p5",
            ResultKey::Minus5 => "minus5",
            ResultKey::Plus10 => "plus10",
        }
    }
}

/// Every value derived from one canonical amount, in whole Rupiah.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultSet {
    pub original: u64,
    pub p11: u64,
    pub p16: u64,
    pub p5: u64,
    pub minus5: u64,
    pub plus10: u64,
}

impl ResultSet {
    pub fn get(&self, key: ResultKey) -> u64 {
        match key {
            ResultKey::Original => self.original,
            ResultKey::P11 => self.p11,
            ResultKey::P16 => self.p16,
            ResultKey::P5 => self.p5,
            ResultKey::Minus5 => self.minus5,
            ResultKey::Plus10 => self.plus10,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResultKey, u64)> + '_ {
        ResultKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }
}

/// Observable calculator state after a transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculatorSnapshot {
    pub raw_digits: String,
    pub value: u64,
    pub results: ResultSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_set_serializes_with_fixed_keys() {
        let results = ResultSet {
            original: 100,
            p11: 11,
            p16: 16,
            p5: 5,
            minus5: 95,
            plus10: 110,
        };
        let json = serde_json::to_value(results).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for key in ResultKey::ALL {
            assert_eq!(object[key.as_str()], serde_json::json!(results.get(key)));
        }
    }

    #[test]
    fn result_key_round_trips_through_its_name() {
        let key: ResultKey = serde_json::from_str("\"minus5\"").unwrap();
        assert_eq!(key, ResultKey::Minus5);
        assert_eq!(serde_json::to_string(&ResultKey::Plus10).unwrap(), "\"plus10\"");
    }

    #[test]
    fn iter_visits_every_key_once() {
        let results = ResultSet { original: 7, ..ResultSet::default() };
        let collected: Vec<_> = results.iter().collect();
        assert_eq!(collected.len(), 6);
        assert_eq!(collected[0], (ResultKey::Original, 7));
        assert!(collected[1..].iter().all(|(_, v)| *v == 0));
    }
}
