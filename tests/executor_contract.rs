// tests/executor_contract.rs
//! Behavioural contract of the request engine: query encoding, GET page
//! size, pagination, and client errors returned as data.

mod common;

use canvas_api::{
    encode_query, CanvasClient, CanvasError, GroupKey, ParamSet, ParamValue, RawResponse,
    RequestDescriptor, Scalar, Verb,
};
use common::{ok, page, RecordingTransport};
use indexmap::IndexMap;
use serde_json::json;

#[cfg(test)]
mod query_encoding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn positional_group_uses_empty_brackets() {
        let mut b = IndexMap::new();
        b.insert(GroupKey::Index(0), Scalar::from("x"));
        b.insert(GroupKey::Index(1), Scalar::from("y"));
        let mut params = ParamSet::new().with("a", 1);
        params.insert("b", ParamValue::Group(b));

        assert_eq!(encode_query(&params), "a=1&b[]=x&b[]=y");
    }

    #[test]
    fn named_group_uses_field_name() {
        let params = ParamSet::new().with_group("course", [("name", "N")]);
        assert_eq!(encode_query(&params), "course[name]=N");
    }

    #[test]
    fn json_built_params_encode_like_builders() {
        let from_json = ParamSet::try_from(json!({
            "a": 1,
            "b": ["x", "y"],
            "course": {"name": "N"}
        }))
        .unwrap();
        assert_eq!(encode_query(&from_json), "a=1&b[]=x&b[]=y&course[name]=N");
    }

    #[test]
    fn encoding_twice_gives_the_same_string() {
        let params = ParamSet::new()
            .with("search_term", "baz")
            .with_list("enrollment_type", ["teacher", "ta"]);
        assert_eq!(encode_query(&params), encode_query(&params));
    }
}

#[cfg(test)]
mod reads {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_pages_are_concatenated_with_two_follow_ups() {
        let transport = RecordingTransport::replying(vec![
            page("[1,2]", Some("https://canvas.test/api/v1/courses?page=2&per_page=100")),
            page("[3,4]", Some("https://canvas.test/api/v1/courses?page=3&per_page=100")),
            page("[5]", None),
        ]);
        let client = CanvasClient::new(transport);

        let result = client.get("courses", ParamSet::new()).unwrap();

        assert_eq!(result.data, json!([1, 2, 3, 4, 5]));
        assert_eq!(result.pages, 3);
        assert_eq!(
            client.transport().follows(),
            vec![
                "https://canvas.test/api/v1/courses?page=2&per_page=100".to_string(),
                "https://canvas.test/api/v1/courses?page=3&per_page=100".to_string(),
            ]
        );
    }

    #[test]
    fn endless_next_links_stop_after_twenty_follow_ups() {
        let looping = page("[1]", Some("https://canvas.test/api/v1/courses?page=1&per_page=100"));
        let client = CanvasClient::new(RecordingTransport::always(looping));

        let err = client.get("courses", ParamSet::new()).unwrap_err();

        assert!(matches!(
            err,
            CanvasError::PaginationLimitExceeded { limit: 20, .. }
        ));
        assert_eq!(client.transport().follows().len(), 20);
        assert_eq!(client.transport().sends().len(), 1);
    }

    #[test]
    fn per_page_is_always_one_hundred() {
        let client = CanvasClient::new(RecordingTransport::always(ok("[]")));

        client.get("courses/1/users", ParamSet::new()).unwrap();
        client
            .get(
                "courses/1/users",
                ParamSet::new().with("per_page", 10).with("search_term", "ann"),
            )
            .unwrap();

        let queries: Vec<String> = client
            .transport()
            .sends()
            .into_iter()
            .map(|(_, _, query)| query)
            .collect();
        assert_eq!(
            queries,
            vec![
                "per_page=100".to_string(),
                "per_page=100&search_term=ann".to_string(),
            ]
        );
    }

    #[test]
    fn paths_are_mounted_under_api_v1() {
        let client = CanvasClient::new(RecordingTransport::always(ok("{}")));

        client.execute(&RequestDescriptor::get("courses/4542")).unwrap();

        assert_eq!(
            client.transport().sends(),
            vec![(Verb::Get, "api/v1/courses/4542".to_string(), "per_page=100".to_string())]
        );
    }
}

#[cfg(test)]
mod client_errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_found_is_returned_as_decoded_body() {
        let client = CanvasClient::new(RecordingTransport::replying(vec![RawResponse::new(
            "https://canvas.test/api/v1/courses/1",
            404,
            r#"{"errors":["not found"]}"#,
        )]));

        let result = client.get("courses/1", ParamSet::new()).unwrap();

        assert_eq!(result.data, json!({"errors": ["not found"]}));
        assert_eq!(result.status, 404);
    }

    #[test]
    fn unauthorized_write_is_returned_as_decoded_body() {
        let client = CanvasClient::new(RecordingTransport::replying(vec![RawResponse::new(
            "https://canvas.test/api/v1/accounts/1/courses",
            401,
            r#"{"errors":[{"message":"Invalid access token."}],"status":"unauthenticated"}"#,
        )]));

        let result = client.post("accounts/1/courses", ParamSet::new()).unwrap();

        assert_eq!(result.data["status"], json!("unauthenticated"));
        assert!(result.is_client_error());
    }

    #[test]
    fn non_json_error_body_is_malformed() {
        let client = CanvasClient::new(RecordingTransport::replying(vec![RawResponse::new(
            "https://canvas.test/api/v1/courses",
            500,
            "<html>oops</html>",
        )]));

        let err = client.get("courses", ParamSet::new()).unwrap_err();

        assert!(matches!(err, CanvasError::MalformedResponse(_)));
    }
}

#[cfg(test)]
mod writes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_return_body_verbatim_without_paginating() {
        let body = r#"{"id":9,"name":"Section A","course_id":4}"#;
        for verb in [Verb::Put, Verb::Post, Verb::Delete] {
            let transport = RecordingTransport::replying(vec![page(
                body,
                Some("https://canvas.test/api/v1/sections?page=2"),
            )]);
            let client = CanvasClient::new(transport);

            let result = client
                .execute(&RequestDescriptor::new(verb, "sections/9"))
                .unwrap();

            assert_eq!(result.data, serde_json::from_str::<serde_json::Value>(body).unwrap());
            assert!(client.transport().follows().is_empty(), "{} paginated", verb);
            assert_eq!(client.transport().sends()[0].2, "", "{} added params", verb);
        }
    }

    #[test]
    fn empty_delete_body_is_null() {
        let client = CanvasClient::new(RecordingTransport::replying(vec![RawResponse::new(
            "https://canvas.test/api/v1/sections/9",
            204,
            "",
        )]));

        let result = client.delete("sections/9", ParamSet::new()).unwrap();

        assert_eq!(result.data, serde_json::Value::Null);
        assert_eq!(result.status, 204);
    }
}
