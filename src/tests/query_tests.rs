// @file: capital_history/src/tests/query_tests.rs
// @description: Query string construction: omission, ordering, encoding.
// @author: LAS.

#[cfg(test)]
mod query_tests {
    use crate::core::models::{ParamValue, QueryParams};
    use crate::utils::query::build_query_string;

    #[test]
    fn omits_empty_and_null_values() {
        let params: QueryParams = QueryParams::new()
            .with("a", "")
            .with("b", ParamValue::Null)
            .with("c", "x");

        assert_eq!(build_query_string(&params), "c=x");
    }

    #[test]
    fn keeps_insertion_order() {
        let params: QueryParams = QueryParams::new()
            .with("startTime", 1000i64)
            .with("endTime", 2000i64);

        assert_eq!(build_query_string(&params), "startTime=1000&endTime=2000");
    }

    #[test]
    fn empty_when_nothing_survives() {
        assert_eq!(build_query_string(&QueryParams::new()), "");

        let params: QueryParams = QueryParams::new()
            .with("coin", None::<String>)
            .with("status", "");
        assert_eq!(build_query_string(&params), "");
    }

    #[test]
    fn url_encodes_values() {
        let params: QueryParams = QueryParams::new()
            .with("coin", "USDT")
            .with("note", "a b&c=d");

        assert_eq!(build_query_string(&params), "coin=USDT&note=a+b%26c%3Dd");
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut params: QueryParams = QueryParams::new()
            .with("startTime", 1i64)
            .with("endTime", 2i64);
        params.insert("startTime", 5i64);

        assert_eq!(params.len(), 2);
        assert_eq!(build_query_string(&params), "startTime=5&endTime=2");
    }

    #[test]
    fn merge_lets_later_keys_win() {
        let mut base: QueryParams = QueryParams::new()
            .with("startTime", 1i64)
            .with("endTime", 2i64);
        let extra: QueryParams = QueryParams::new()
            .with("endTime", 9i64)
            .with("coin", "BTC");
        base.merge(&extra);

        assert_eq!(build_query_string(&base), "startTime=1&endTime=9&coin=BTC");
        assert_eq!(base.get("endTime"), Some(&ParamValue::Int(9)));
    }
}
