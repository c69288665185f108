use file_size::prelude::*;

#[cfg(test)]
mod parsing {
    use file_size::{Error, FileSize};

    #[test]
    fn test_parse_human_sizes() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(FileSize::parse("2mb")?.bytes(), 2 * 1_048_576);
        assert_eq!(FileSize::parse("2 GB")?.bytes(), 2 * 1_073_741_824);
        assert_eq!(FileSize::parse("212.5tb")?.bytes(), (212.5f64 * 1_099_511_627_776.0).round() as i64);
        assert_eq!(FileSize::parse("21B")?.bytes(), 21);
        assert_eq!(FileSize::parse("21")?.bytes(), 21);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        assert!(matches!(FileSize::parse("5xx"), Err(Error::UnsupportedUnit(ref unit)) if unit == "xx"));
        assert!(FileSize::try_parse("5xx").is_none());
    }
}

#[test]
fn test_display_then_parse() -> Result<()> {
    for text in ["0 KB", "1023 B", "1 KB", "1.5 GB", "212.5 TB", "7.25 MB"] {
        let size = FileSize::parse(text)?;
        assert_eq!(size.to_string(), text);
    }
    Ok(())
}

#[test]
fn test_disk_accounting() -> Result<()> {
    // Tally a few files and compare against a quota
    let files = ["700 MB", "1.2 GB", "512kb", "12 B"];
    let total: FileSize = files.iter().map(|f| FileSize::parse(f)).collect::<Result<Vec<_>>>()?.iter().sum();
    let quota = FileSize::from_gigabytes(2.0);

    assert!(total < quota);
    let free = quota - total;
    assert_eq!(free + total, quota);
    assert_eq!(free.display_unit(), SizeUnit::Megabyte);

    let overdrawn = total - quota - quota;
    assert!(overdrawn.is_negative());
    assert!(overdrawn.to_string().starts_with('-'));
    Ok(())
}

#[test]
fn test_unit_conversions_agree() {
    let size = FileSize::new(5 * TERABYTE);

    assert_eq!(size.terabytes(), 5.0);
    assert_eq!(size.gigabytes(), 5.0 * 1024.0);
    assert_eq!(size.megabytes(), 5.0 * 1024.0 * 1024.0);
    assert_eq!(size.kilobytes(), 5.0 * 1024.0 * 1024.0 * 1024.0);
    assert_eq!(size.bits(), 5 * TERABYTE * 8);

    for unit in SizeUnit::ALL {
        assert_eq!(FileSize::from_unit(size.as_unit(unit), unit), size, "unit {}", unit);
    }
}

#[test]
fn test_integer_conversions() {
    assert_eq!(FileSize::from(KILOBYTE), FileSize::from(1024i32));
    assert_eq!(i64::from(FileSize::new(MEGABYTE)), MEGABYTE);
    assert!(matches!(FileSize::try_from(u64::MAX), Err(Error::OutOfRange(_))));
    assert_eq!(FileSize::try_from(GIGABYTE as usize).ok(), Some(FileSize::new(GIGABYTE)));
}
