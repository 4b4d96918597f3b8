// ==========================================
// 喪葬擇日引擎 - 祭祀日期集合
// ==========================================
// 9 个固定键（頭七..滿七、百日、對年）始终齐全
// ==========================================

use crate::domain::types::{RitualMode, RitualName};
use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 单个祭祀日期: 农历串 + 公历日期
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RitualDate {
    pub lunar: String,
    pub solar: NaiveDate,
}

/// 祭祀日期集合
///
/// 以数组按 `RitualName::index()` 存放，保证 9 个键都存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RitualDateSet {
    pub death_date: NaiveDate,
    pub mode: RitualMode,
    dates: [RitualDate; 9],
}

impl RitualDateSet {
    pub fn new(death_date: NaiveDate, mode: RitualMode, dates: [RitualDate; 9]) -> Self {
        Self {
            death_date,
            mode,
            dates,
        }
    }

    pub fn get(&self, name: RitualName) -> &RitualDate {
        &self.dates[name.index()]
    }

    /// 按固定顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (RitualName, &RitualDate)> {
        RitualName::ALL.iter().map(move |name| (*name, self.get(*name)))
    }
}

impl Serialize for RitualDateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RitualName::ALL.len()))?;
        for (name, date) in self.iter() {
            map.serialize_entry(name.as_str(), &(date.lunar.as_str(), date.solar.to_string()))?;
        }
        map.end()
    }
}
