/// представить ASCII-строку в виде hex-байтов через пробел: "ffi" -> "66 66 69"
pub fn format_hex_pairs(input: &str) -> String
{
    input
        .bytes()
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<String>>()
        .join(" ")
}
