//! Static datasets for the operator detail charts.
//!
//! These are placeholder analytics: no endpoint serves them yet, so every
//! operator shows the same figures.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

/// A labelled value for line and pie charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedValue {
    pub name: &'static str,
    pub value: f64,
}

const fn nv(name: &'static str, value: f64) -> NamedValue {
    NamedValue { name, value }
}

/// One month of breach counts for the stacked bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreachRow {
    pub name: &'static str,
    pub speed_breach: f64,
    pub job_breach: f64,
    pub area_breach: f64,
    pub other: f64,
}

impl BreachRow {
    /// Value of the series identified by its data key.
    #[must_use]
    pub fn value(&self, key: &str) -> f64 {
        match key {
            "speedBreach" => self.speed_breach,
            "jobBreach" => self.job_breach,
            "areaBreach" => self.area_breach,
            "other" => self.other,
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.speed_breach + self.job_breach + self.area_breach + self.other
    }
}

/// A stacked series: data key plus fill colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreachSeries {
    pub key: &'static str,
    pub color: &'static str,
}

/// Stacking order, bottom first.
pub const BREACH_SERIES: [BreachSeries; 4] = [
    BreachSeries { key: "speedBreach", color: "#EA6C4C" },
    BreachSeries { key: "jobBreach", color: "#6074DD" },
    BreachSeries { key: "areaBreach", color: "#59CBEB" },
    BreachSeries { key: "other", color: "#E44B5D" },
];

/// Display label for a breach series key, as shown in the legend and tooltip.
#[must_use]
pub fn breach_label(key: &str) -> &'static str {
    match key {
        "speedBreach" => "Hız ihlali",
        "areaBreach" => "Bölge ihlali",
        "jobBreach" => "Dökme ihlali",
        "other" => "Diğer",
        _ => "",
    }
}

pub const STACKED_BAR_DATA: &[BreachRow] = &[
    BreachRow { name: "Ocak", speed_breach: 40.0, job_breach: 24.0, area_breach: 12.0, other: 6.0 },
    BreachRow { name: "Şubat", speed_breach: 30.0, job_breach: 13.0, area_breach: 22.0, other: 4.0 },
    BreachRow { name: "Mart", speed_breach: 20.0, job_breach: 38.0, area_breach: 9.0, other: 10.0 },
    BreachRow { name: "Nisan", speed_breach: 27.0, job_breach: 19.0, area_breach: 30.0, other: 3.0 },
    BreachRow { name: "Mayıs", speed_breach: 18.0, job_breach: 28.0, area_breach: 14.0, other: 8.0 },
    BreachRow { name: "Haziran", speed_breach: 23.0, job_breach: 18.0, area_breach: 25.0, other: 5.0 },
    BreachRow { name: "Temmuz", speed_breach: 34.0, job_breach: 23.0, area_breach: 17.0, other: 7.0 },
];

/// Daily speed figures, reused by the load and ore charts.
pub const PERSONNEL_DATA_LINE: &[NamedValue] = &[
    nv("Pzt", 80.0),
    nv("Sal", 120.0),
    nv("Çar", 95.0),
    nv("Per", 140.0),
    nv("Cum", 70.0),
    nv("Cmt", 105.0),
    nv("Paz", 60.0),
];

pub const PERSONNEL_DATA_DOUGHNUT: &[NamedValue] = &[nv("Başarılı", 72.0), nv("Başarısız", 28.0)];
pub const PERSONNEL_DOUGHNUT_COLORS: &[&str] = &["#59CBEB", "#E44B5D"];

pub const PERSONNEL_DATA_PIE: &[NamedValue] = &[
    nv("Bölge A", 400.0),
    nv("Bölge B", 300.0),
    nv("Bölge C", 300.0),
    nv("Bölge D", 200.0),
];
pub const PERSONNEL_PIE_COLORS: &[&str] = &["#6074DD", "#59CBEB", "#EA6C4C", "#E44B5D"];

pub const DRIVER_SCORE: u32 = 300;
pub const TOTAL_SPEED_BREACHES: u32 = 70;
pub const AVERAGE_SPEED: &str = "150km";

/// Label/value pairs of the operations summary card.
pub const OPERATION_METRICS: &[(&str, &str)] = &[
    ("Toplam bölge ihlali sayısı:", "50"),
    ("Yanlış Döküm Sayısı:", "50"),
    ("Ortalama RPM:", "3500"),
    ("Ortalama Yakıt Tüketimi(Lt.):", "50"),
    ("Toplam Arıza İndikatörü Sayısı:", "50"),
    ("Kayıp Süre(Dk.):", "50"),
    ("İş Makinesi Önünde Bekleyen Kamyon Sayısı(Ortalama):", "50"),
];

/// Colour for slice `index`, cycling through `palette`.
#[must_use]
pub fn cycle_color(palette: &[&'static str], index: usize) -> &'static str {
    if palette.is_empty() {
        return "#999999";
    }
    palette[index % palette.len()]
}
