/// Sensors the dashboard knows about, in display order.
pub const SENSORS: &[(&str, &str)] = &[
    ("temp_01", "Living Room Sensor"),
    ("temp_02", "Office Sensor"),
    ("temp_03", "Outdoor Sensor"),
];

pub const SENSOR_ID_PREFIX: &str = "temp";

pub fn default_sensor() -> &'static str {
    SENSORS[0].0
}

pub fn display_name(sensor_id: &str) -> Option<&'static str> {
    SENSORS
        .iter()
        .find(|(id, _)| *id == sensor_id)
        .map(|(_, name)| *name)
}

pub fn is_known(sensor_id: &str) -> bool {
    display_name(sensor_id).is_some()
}

/// `temp_01`, `temp_02`, ...
pub fn sensor_id(number: u32) -> String {
    format!("{SENSOR_ID_PREFIX}_{number:02}")
}
