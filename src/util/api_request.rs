/// send a PUT request with a json body and return the response status.
/// the response body is ignored; the control server only answers with a
/// plain status line.
pub async fn put_json(
    client: &reqwest::Client,
    url: &str,
    body: serde_json::Value,
) -> Result<reqwest::StatusCode, &'static str> {
    let result = client.put(url).body(body.to_string()).send().await;

    let Ok(response) = result else {
        return Err("sending request failed");
    };
    Ok(response.status())
}
