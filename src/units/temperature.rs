use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8,
        TemperatureUnit::Rankine => (value - 491.67) / 1.8,
    }
}

/// 섭씨 값을 원하는 단위로 변환한다. 화씨는 `°C×1.8+32` 그대로 계산한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c * 1.8 + 32.0,
        TemperatureUnit::Rankine => value_c * 1.8 + 491.67,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_celsius(to_celsius(value, from), to)
}
