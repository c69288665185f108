#![cfg(feature = "serde")]

use file_size::FileSize;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CacheConfig {
    max_size: FileSize,
    chunk_size: FileSize,
}

#[test]
fn test_serialize_as_byte_count() {
    let json = serde_json::to_string(&FileSize::from_megabytes(1.5)).unwrap();
    assert_eq!(json, "1572864");

    let json = serde_json::to_string(&FileSize::new(-12)).unwrap();
    assert_eq!(json, "-12");
}

#[test]
fn test_deserialize_from_integer() {
    let size: FileSize = serde_json::from_str("1048576").unwrap();
    assert_eq!(size, FileSize::new(1_048_576));

    let size: FileSize = serde_json::from_str("-4").unwrap();
    assert_eq!(size.bytes(), -4);
}

#[test]
fn test_deserialize_from_string() {
    let config: CacheConfig = serde_json::from_str(r#"{ "max_size": "2 GB", "chunk_size": 65536 }"#).unwrap();

    assert_eq!(config.max_size, FileSize::from_gigabytes(2.0));
    assert_eq!(config.chunk_size.to_string(), "64 KB");
}

#[test]
fn test_deserialize_rejects_bad_input() {
    let err = serde_json::from_str::<FileSize>(r#""5xx""#).unwrap_err();
    assert!(err.to_string().contains("invalid size"));

    assert!(serde_json::from_str::<FileSize>("18446744073709551615").is_err());
    assert!(serde_json::from_str::<FileSize>("true").is_err());
}

#[test]
fn test_round_trip() {
    let size = FileSize::parse("212.5tb").unwrap();
    let json = serde_json::to_string(&size).unwrap();
    assert_eq!(serde_json::from_str::<FileSize>(&json).unwrap(), size);
}
