// @file: capital_history/src/tests/time_codec_tests.rs
// @description: Conversions between epoch millis and 'YYYY-MM-DD HH:MM:SS' UTC strings.
// @author: LAS.

#[cfg(test)]
mod time_codec_tests {
    use crate::core::errors::HistoryError;
    use crate::core::models::TimePoint;
    use crate::utils::time_codec::{datetime_to_millis, millis_to_datetime};

    #[test]
    fn formats_known_timestamps() {
        assert_eq!(millis_to_datetime(0).unwrap(), "1970-01-01 00:00:00");
        assert_eq!(millis_to_datetime(1708869910000).unwrap(), "2024-02-25 14:05:10");
        assert_eq!(millis_to_datetime(1704067200000).unwrap(), "2024-01-01 00:00:00");
    }

    #[test]
    fn truncates_sub_second_part() {
        assert_eq!(millis_to_datetime(1704067200999).unwrap(), "2024-01-01 00:00:00");
    }

    #[test]
    fn parses_known_datetimes() {
        assert_eq!(datetime_to_millis("2024-01-01 00:00:00").unwrap(), 1704067200000);
        assert_eq!(datetime_to_millis("2024-01-02 00:00:00").unwrap(), 1704153600000);
    }

    #[test]
    fn round_trips_second_granular_values() {
        // #1. Sample across the representable range, including leap days and year ends
        let samples: [i64; 7] = [
            0,
            951_782_400_000,     // 2000-02-29
            1_704_067_199_000,   // 2023-12-31 23:59:59
            1_704_067_200_000,
            1_708_869_910_000,
            4_102_444_800_000,   // 2100-01-01
            253_402_300_799_000, // 9999-12-31 23:59:59
        ];

        for m in samples {
            let text: String = millis_to_datetime(m).unwrap();
            assert_eq!(datetime_to_millis(&text).unwrap(), m, "round trip failed for {}", text);
        }

        // #2. Walk a day in odd strides
        let mut m: i64 = 1_700_000_000_000;
        while m < 1_700_086_400_000 {
            assert_eq!(datetime_to_millis(&millis_to_datetime(m).unwrap()).unwrap(), m);
            m += 7_919_000;
        }
    }

    #[test]
    fn rejects_negative_millis() {
        match millis_to_datetime(-1) {
            Err(HistoryError::InvalidTimestamp(ms)) => assert_eq!(ms, -1),
            other => panic!("expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_millis() {
        assert!(matches!(millis_to_datetime(i64::MAX), Err(HistoryError::InvalidTimestamp(_))));
    }

    #[test]
    fn rejects_malformed_datetimes() {
        let bad: [&str; 11] = [
            "",
            "2024-01-01",
            "2024-01-01T00:00:00",
            "2024-13-01 00:00:00",
            "2024-01-01 25:00:00",
            "yesterday",
            "2024-01-0100:00:00",
            " 2024-01-01 00:00:00",
            "2024-01-01   00:00:00",
            "2024-01-01 00:00:00 ",
            "2024-1-01 00:00:00",
        ];

        for s in bad {
            match datetime_to_millis(s) {
                Err(HistoryError::InvalidDatetimeFormat(got)) => assert_eq!(got, s),
                other => panic!("expected InvalidDatetimeFormat for {:?}, got {:?}", s, other),
            }
        }
    }

    #[test]
    fn time_point_parses_cli_input() {
        let millis: TimePoint = "1704067200000".parse().unwrap();
        assert_eq!(millis, TimePoint::Millis(1704067200000));

        let text: TimePoint = "2024-01-01 00:00:00".parse().unwrap();
        assert_eq!(text, TimePoint::Datetime("2024-01-01 00:00:00".to_string()));

        assert_eq!(millis.to_millis().unwrap(), text.to_millis().unwrap());
        assert!(matches!(TimePoint::Millis(-5).to_millis(), Err(HistoryError::InvalidTimestamp(-5))));
    }
}
