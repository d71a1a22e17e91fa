use std::sync::Arc;

use promptsmith::MockLlm;
use reqwest::StatusCode;

use super::common;

#[tokio::test]
async fn e2e_page_renders_form() {
    let server = common::spawn_with_mock(Arc::new(MockLlm::with_content("unused"))).await;

    let resp = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();

    assert!(html.contains("IA Engenheira de Prompts Elétricos"));
    assert!(html.contains(r#"<textarea id="objective""#));
    assert!(html.contains(r#"<button id="generate">"#));

    server.stop().await;
}

#[tokio::test]
async fn e2e_page_without_credential_disables_button() {
    let server = common::spawn_without_credential().await;

    let html = reqwest::get(server.url("/")).await.unwrap().text().await.unwrap();

    assert!(html.contains(r#"<button id="generate" disabled>"#));
    assert!(html.contains("Chave da API OpenAI não encontrada."));

    server.stop().await;
}
