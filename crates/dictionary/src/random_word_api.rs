// https://github.com/dulldesk/words-api/tree/master - amount, first letter, kind (noun or adj) // bad because it sends duplicates
// https://random-word-api.vercel.app/ - amount, length, first letter
// https://random-word.ryanrk.com/ - amount, length(minmax) // bad because the words are weird

use crate::RandomWordError;

pub(crate) async fn get_random_words(
    client: &reqwest::Client,
    base_url: &str,
    max: usize,
    length: Option<usize>,
) -> Result<Vec<String>, RandomWordError> {
    let mut req = client.get(base_url).query(&[("words", max)]);
    if let Some(length) = length {
        req = req.query(&[("length", length)]);
    }
    let res: reqwest::Response = req.send().await.map_err(RandomWordError::Fetch)?;
    let words = res
        .json::<Vec<String>>()
        .await
        .map_err(RandomWordError::Deserialize)?;
    if words.is_empty() {
        return Err(RandomWordError::Empty);
    }
    Ok(words)
}
