//! The embedded static reference dataset: all fifty US states.
//!
//! The raw table is compile-time constant data; it is materialised into
//! [`StateRecord`]s exactly once, before serving begins, and never mutated
//! afterwards.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::state::StateRecord;

struct RawState {
  code:       &'static str,
  name:       &'static str,
  capital:    &'static str,
  population: u64,
  area:       f64,
  admitted:   (i32, u32, u32),
}

/// Population figures are the 2020 census; area is total area in square
/// miles.
#[rustfmt::skip]
const RAW: &[RawState] = &[
  RawState { code: "AL", name: "Alabama",        capital: "Montgomery",     population: 5_024_279,  area: 52_420.0,  admitted: (1819, 12, 14) },
  RawState { code: "AK", name: "Alaska",         capital: "Juneau",         population: 733_391,    area: 665_384.0, admitted: (1959, 1, 3) },
  RawState { code: "AZ", name: "Arizona",        capital: "Phoenix",        population: 7_151_502,  area: 113_990.0, admitted: (1912, 2, 14) },
  RawState { code: "AR", name: "Arkansas",       capital: "Little Rock",    population: 3_011_524,  area: 53_179.0,  admitted: (1836, 6, 15) },
  RawState { code: "CA", name: "California",     capital: "Sacramento",     population: 39_538_223, area: 163_695.0, admitted: (1850, 9, 9) },
  RawState { code: "CO", name: "Colorado",       capital: "Denver",         population: 5_773_714,  area: 104_094.0, admitted: (1876, 8, 1) },
  RawState { code: "CT", name: "Connecticut",    capital: "Hartford",       population: 3_605_944,  area: 5_543.0,   admitted: (1788, 1, 9) },
  RawState { code: "DE", name: "Delaware",       capital: "Dover",          population: 989_948,    area: 2_489.0,   admitted: (1787, 12, 7) },
  RawState { code: "FL", name: "Florida",        capital: "Tallahassee",    population: 21_538_187, area: 65_758.0,  admitted: (1845, 3, 3) },
  RawState { code: "GA", name: "Georgia",        capital: "Atlanta",        population: 10_711_908, area: 59_425.0,  admitted: (1788, 1, 2) },
  RawState { code: "HI", name: "Hawaii",         capital: "Honolulu",       population: 1_455_271,  area: 10_932.0,  admitted: (1959, 8, 21) },
  RawState { code: "ID", name: "Idaho",          capital: "Boise",          population: 1_839_106,  area: 83_569.0,  admitted: (1890, 7, 3) },
  RawState { code: "IL", name: "Illinois",       capital: "Springfield",    population: 12_812_508, area: 57_914.0,  admitted: (1818, 12, 3) },
  RawState { code: "IN", name: "Indiana",        capital: "Indianapolis",   population: 6_785_528,  area: 36_420.0,  admitted: (1816, 12, 11) },
  RawState { code: "IA", name: "Iowa",           capital: "Des Moines",     population: 3_190_369,  area: 56_273.0,  admitted: (1846, 12, 28) },
  RawState { code: "KS", name: "Kansas",         capital: "Topeka",         population: 2_937_880,  area: 82_278.0,  admitted: (1861, 1, 29) },
  RawState { code: "KY", name: "Kentucky",       capital: "Frankfort",      population: 4_505_836,  area: 40_408.0,  admitted: (1792, 6, 1) },
  RawState { code: "LA", name: "Louisiana",      capital: "Baton Rouge",    population: 4_657_757,  area: 52_378.0,  admitted: (1812, 4, 30) },
  RawState { code: "ME", name: "Maine",          capital: "Augusta",        population: 1_362_359,  area: 35_380.0,  admitted: (1820, 3, 15) },
  RawState { code: "MD", name: "Maryland",       capital: "Annapolis",      population: 6_177_224,  area: 12_406.0,  admitted: (1788, 4, 28) },
  RawState { code: "MA", name: "Massachusetts",  capital: "Boston",         population: 7_029_917,  area: 10_554.0,  admitted: (1788, 2, 6) },
  RawState { code: "MI", name: "Michigan",       capital: "Lansing",        population: 10_077_331, area: 96_714.0,  admitted: (1837, 1, 26) },
  RawState { code: "MN", name: "Minnesota",      capital: "Saint Paul",     population: 5_706_494,  area: 86_936.0,  admitted: (1858, 5, 11) },
  RawState { code: "MS", name: "Mississippi",    capital: "Jackson",        population: 2_961_279,  area: 48_432.0,  admitted: (1817, 12, 10) },
  RawState { code: "MO", name: "Missouri",       capital: "Jefferson City", population: 6_154_913,  area: 69_707.0,  admitted: (1821, 8, 10) },
  RawState { code: "MT", name: "Montana",        capital: "Helena",         population: 1_084_225,  area: 147_040.0, admitted: (1889, 11, 8) },
  RawState { code: "NE", name: "Nebraska",       capital: "Lincoln",        population: 1_961_504,  area: 77_348.0,  admitted: (1867, 3, 1) },
  RawState { code: "NV", name: "Nevada",         capital: "Carson City",    population: 3_104_614,  area: 110_572.0, admitted: (1864, 10, 31) },
  RawState { code: "NH", name: "New Hampshire",  capital: "Concord",        population: 1_377_529,  area: 9_349.0,   admitted: (1788, 6, 21) },
  RawState { code: "NJ", name: "New Jersey",     capital: "Trenton",        population: 9_288_994,  area: 8_723.0,   admitted: (1787, 12, 18) },
  RawState { code: "NM", name: "New Mexico",     capital: "Santa Fe",       population: 2_117_522,  area: 121_590.0, admitted: (1912, 1, 6) },
  RawState { code: "NY", name: "New York",       capital: "Albany",         population: 20_201_249, area: 54_555.0,  admitted: (1788, 7, 26) },
  RawState { code: "NC", name: "North Carolina", capital: "Raleigh",        population: 10_439_388, area: 53_819.0,  admitted: (1789, 11, 21) },
  RawState { code: "ND", name: "North Dakota",   capital: "Bismarck",       population: 779_094,    area: 70_698.0,  admitted: (1889, 11, 2) },
  RawState { code: "OH", name: "Ohio",           capital: "Columbus",       population: 11_799_448, area: 44_826.0,  admitted: (1803, 3, 1) },
  RawState { code: "OK", name: "Oklahoma",       capital: "Oklahoma City",  population: 3_959_353,  area: 69_899.0,  admitted: (1907, 11, 16) },
  RawState { code: "OR", name: "Oregon",         capital: "Salem",          population: 4_237_256,  area: 98_379.0,  admitted: (1859, 2, 14) },
  RawState { code: "PA", name: "Pennsylvania",   capital: "Harrisburg",     population: 13_002_700, area: 46_054.0,  admitted: (1787, 12, 12) },
  RawState { code: "RI", name: "Rhode Island",   capital: "Providence",     population: 1_097_379,  area: 1_545.0,   admitted: (1790, 5, 29) },
  RawState { code: "SC", name: "South Carolina", capital: "Columbia",       population: 5_118_425,  area: 32_020.0,  admitted: (1788, 5, 23) },
  RawState { code: "SD", name: "South Dakota",   capital: "Pierre",         population: 886_667,    area: 77_116.0,  admitted: (1889, 11, 2) },
  RawState { code: "TN", name: "Tennessee",      capital: "Nashville",      population: 6_910_840,  area: 42_144.0,  admitted: (1796, 6, 1) },
  RawState { code: "TX", name: "Texas",          capital: "Austin",         population: 29_145_505, area: 268_596.0, admitted: (1845, 12, 29) },
  RawState { code: "UT", name: "Utah",           capital: "Salt Lake City", population: 3_271_616,  area: 84_897.0,  admitted: (1896, 1, 4) },
  RawState { code: "VT", name: "Vermont",        capital: "Montpelier",     population: 643_077,    area: 9_616.0,   admitted: (1791, 3, 4) },
  RawState { code: "VA", name: "Virginia",       capital: "Richmond",       population: 8_631_393,  area: 42_775.0,  admitted: (1788, 6, 25) },
  RawState { code: "WA", name: "Washington",     capital: "Olympia",        population: 7_705_281,  area: 71_298.0,  admitted: (1889, 11, 11) },
  RawState { code: "WV", name: "West Virginia",  capital: "Charleston",     population: 1_793_716,  area: 24_230.0,  admitted: (1863, 6, 20) },
  RawState { code: "WI", name: "Wisconsin",      capital: "Madison",        population: 5_893_718,  area: 65_496.0,  admitted: (1848, 5, 29) },
  RawState { code: "WY", name: "Wyoming",        capital: "Cheyenne",       population: 576_851,    area: 97_813.0,  admitted: (1890, 7, 10) },
];

static DATASET: LazyLock<Vec<StateRecord>> = LazyLock::new(|| {
  RAW
    .iter()
    .map(|raw| {
      let (y, m, d) = raw.admitted;
      StateRecord {
        code:       raw.code,
        name:       raw.name,
        capital:    raw.capital,
        population: raw.population,
        area:       raw.area,
        // Constant table data; `dataset_dates_are_valid` covers every row.
        admitted:   NaiveDate::from_ymd_opt(y, m, d)
          .expect("valid admission date in dataset"),
      }
    })
    .collect()
});

/// The full static dataset, in table order.
pub fn all() -> &'static [StateRecord] { &DATASET }

/// Point lookup by exact (uppercase) code.
pub fn find(code: &str) -> Option<&'static StateRecord> {
  DATASET.iter().find(|record| record.code == code)
}
