// https://dictionaryapi.dev/ - free, no key, answers unknown words with a 404 and a json object

use crate::{DictionaryError, DictionaryResponse};

pub(crate) async fn fetch_word_data(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<DictionaryResponse, DictionaryError> {
    // the status is not checked, a json error body is rejected later by its shape
    let res: reqwest::Response = client
        .get(format!("{base_url}{word}"))
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    tracing::debug!(word, status = %res.status(), "dictionary response");
    res.json::<DictionaryResponse>()
        .await
        .map_err(DictionaryError::Deserialize)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{Dictionary, DictionaryError, DictionaryResponse, Endpoints};

    fn dictionary_for(server: &MockServer) -> Dictionary {
        dictionary_at(&format!("{}/entries/en/", server.uri()))
    }

    fn dictionary_at(base_url: &str) -> Dictionary {
        Dictionary::with_endpoints(Endpoints {
            dictionary: base_url.to_string(),
            ..Endpoints::default()
        })
    }

    #[tokio::test]
    async fn fetches_and_parses_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entries/en/keyboard"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"word": "keyboard", "meanings": [{"partOfSpeech": "noun", "definitions": [{"definition": "A set of keys."}]}]}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let response = dictionary_for(&server)
            .fetch_word_data("keyboard")
            .await
            .unwrap();
        let entry = response.first_entry().unwrap();
        assert_eq!(
            entry.first_definition().unwrap().definition.as_deref(),
            Some("A set of keys.")
        );
    }

    #[tokio::test]
    async fn error_status_with_json_body_is_not_a_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entries/en/qwzx"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(
                r#"{"title": "No Definitions Found", "message": "", "resolution": ""}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let response = dictionary_for(&server)
            .fetch_word_data("qwzx")
            .await
            .unwrap();
        assert!(matches!(response, DictionaryResponse::Other(_)));
        assert!(response.first_entry().is_err());
    }

    #[tokio::test]
    async fn invalid_json_is_a_deserialize_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let error = dictionary_for(&server)
            .fetch_word_data("hello")
            .await
            .unwrap_err();
        assert!(matches!(error, DictionaryError::Deserialize(_)));
        assert_eq!(error.to_string(), "Failed to fetch Word");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_fetch_error() {
        // nothing listens on the discard port
        let dictionary = dictionary_at("http://127.0.0.1:9/entries/en/");
        let error = dictionary.fetch_word_data("hello").await.unwrap_err();
        assert!(matches!(error, DictionaryError::Fetch(_)));
        assert_eq!(error.to_string(), "Failed to fetch Word");
    }
}
