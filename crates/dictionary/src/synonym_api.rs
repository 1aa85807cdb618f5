// https://www.datamuse.com/api/ - rel_syn returns [{"word", "score"}] ordered by score

use crate::{Synonym, SynonymError};

pub(crate) async fn fetch_synonyms(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<Synonym>, SynonymError> {
    let res: reqwest::Response = client
        .get(format!("{base_url}{word}"))
        .send()
        .await
        .map_err(SynonymError::Fetch)?;
    res.json::<Vec<Synonym>>()
        .await
        .map_err(SynonymError::Deserialize)
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{Dictionary, Endpoints, Synonym, SynonymError};

    fn dictionary_for(server: &MockServer) -> Dictionary {
        Dictionary::with_endpoints(Endpoints {
            synonyms: format!("{}/words?rel_syn=", server.uri()),
            ..Endpoints::default()
        })
    }

    #[tokio::test]
    async fn keeps_the_api_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/words"))
            .and(query_param("rel_syn", "happy"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"word": "glad", "score": 1200}, {"word": "felicitous", "score": 900}, {"word": "well-chosen"}]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let synonyms = dictionary_for(&server).fetch_synonyms("happy").await.unwrap();
        assert_eq!(
            synonyms,
            vec![
                Synonym { word: "glad".to_string(), score: Some(1200.0) },
                Synonym { word: "felicitous".to_string(), score: Some(900.0) },
                Synonym { word: "well-chosen".to_string(), score: None },
            ]
        );
    }

    #[tokio::test]
    async fn unexpected_shape_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"error": "nope"}"#, "application/json"))
            .mount(&server)
            .await;

        let error = dictionary_for(&server).fetch_synonyms("happy").await.unwrap_err();
        assert!(matches!(error, SynonymError::Deserialize(_)));
        assert_eq!(error.to_string(), "Failed to fetch Synonym/s");
    }
}
