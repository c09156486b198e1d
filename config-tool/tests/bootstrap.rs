use std::net::SocketAddr;

use axum::{Router, routing::get};
use test_log::test;
use tokio::net::TcpListener;
use url::Url;

use config_tool::bootstrap;
use config_tool::error::ScriptError;
use config_tool::fetch;

const RECORDER: &str = r#"
    seen = {}
    function config_tool(dependencies)
        for index, name in ipairs(dependencies) do
            seen[index] = name
        end
    end
"#;

async fn serve(body: &'static str) -> SocketAddr {
    let app = Router::new().route("/config-impl.lua", get(move || async move { body }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn script_url(addr: SocketAddr) -> Url {
    Url::parse(&format!("http://{addr}/config-impl.lua")).unwrap()
}

#[test(tokio::test)]
async fn fetched_body_is_returned_verbatim() -> anyhow::Result<()> {
    let addr = serve(RECORDER).await;
    let code = fetch::fetch_code(&script_url(addr)).await?;

    assert_eq!(code.len(), RECORDER.len());
    assert_eq!(code, RECORDER.as_bytes());
    Ok(())
}

#[test(tokio::test)]
async fn dependencies_reach_the_entry_point() -> anyhow::Result<()> {
    let addr = serve(RECORDER).await;
    let code = fetch::fetch_code(&script_url(addr)).await?;

    let module = bootstrap::configure(&code, bootstrap::PROJECT_DEPENDENCIES)?;
    let seen: Vec<String> = module.get("seen")?;
    assert_eq!(seen, bootstrap::PROJECT_DEPENDENCIES);
    Ok(())
}

#[test(tokio::test)]
async fn http_error_status_is_a_fetch_error() {
    let addr = serve(RECORDER).await;
    let url = Url::parse(&format!("http://{addr}/missing.lua")).unwrap();

    let err = fetch::fetch_code(&url).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[test(tokio::test)]
async fn unreachable_host_is_swallowed() {
    // nothing listens on port 1
    let url = Url::parse("http://127.0.0.1:1/config-impl.lua").unwrap();
    assert!(fetch::fetch_code(&url).await.is_err());

    // the full sequence still completes
    bootstrap::run(&url, bootstrap::PROJECT_DEPENDENCIES).await;
}

#[test(tokio::test)]
async fn failing_entry_point_is_swallowed() {
    let addr = serve(
        r#"
        function config_tool(dependencies)
            error("configuration failed")
        end
    "#,
    )
    .await;

    bootstrap::run(&script_url(addr), bootstrap::PROJECT_DEPENDENCIES).await;
}

#[test(tokio::test)]
async fn missing_entry_point_is_reported() -> anyhow::Result<()> {
    let addr = serve("x = 1").await;
    let code = fetch::fetch_code(&script_url(addr)).await?;

    let err = bootstrap::configure(&code, bootstrap::PROJECT_DEPENDENCIES).unwrap_err();
    assert!(matches!(err, ScriptError::MissingEntryPoint { .. }));

    // the swallowing wrapper still completes
    bootstrap::run(&script_url(addr), bootstrap::PROJECT_DEPENDENCIES).await;
    Ok(())
}

#[test(tokio::test)]
async fn running_twice_is_idempotent() -> anyhow::Result<()> {
    let addr = serve(RECORDER).await;
    let code = fetch::fetch_code(&script_url(addr)).await?;

    let first = bootstrap::configure(&code, bootstrap::PROJECT_DEPENDENCIES)?;
    let second = bootstrap::configure(&code, bootstrap::PROJECT_DEPENDENCIES)?;

    assert_eq!(
        first.get::<Vec<String>>("seen")?,
        second.get::<Vec<String>>("seen")?
    );
    Ok(())
}
