use std::sync::Arc;

use promptsmith::MockLlm;
use reqwest::StatusCode;
use serve::{ErrorBody, GenerateResponse, TopicRef};

use super::common;

#[tokio::test]
async fn e2e_generate_flow_topic() {
    let mock = Arc::new(MockLlm::with_content("Atue como especialista em sistemas de potência..."));
    let server = common::spawn_with_mock(mock.clone()).await;

    let (status, body) =
        common::post_generate(&server, "Quero otimizar o fluxo de carga da minha rede de 13.8kV")
            .await;

    assert_eq!(status, StatusCode::OK);
    let resp: GenerateResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(resp.topic.id, "otimizacao_fluxo_carga");
    assert_eq!(resp.topic.label, "Otimização de Fluxo de Carga");
    assert_eq!(resp.prompt, "Atue como especialista em sistemas de potência...");
    assert_eq!(mock.calls(), 1);

    server.stop().await;
}

#[tokio::test]
async fn e2e_generate_no_topic_lists_labels() {
    let mock = Arc::new(MockLlm::with_content("unused"));
    let server = common::spawn_with_mock(mock.clone()).await;

    let (status, body) = common::post_generate(&server, "Quero saber a cor do céu").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: ErrorBody = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, "no_topic_matched");
    assert_eq!(
        err.topics,
        Some(vec![
            "Otimização de Fluxo de Carga".to_string(),
            "Previsão de Demanda de Energia".to_string()
        ])
    );
    assert!(err.error.contains("'Otimização de Fluxo de Carga' ou 'Previsão de Demanda de Energia'"));
    assert_eq!(mock.calls(), 0);

    server.stop().await;
}

#[tokio::test]
async fn e2e_generate_blank_text_is_bad_request() {
    let mock = Arc::new(MockLlm::with_content("unused"));
    let server = common::spawn_with_mock(mock.clone()).await;

    let (status, body) = common::post_generate(&server, "   ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: ErrorBody = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, "empty_input");
    assert_eq!(err.topics, None);
    assert_eq!(mock.calls(), 0);

    server.stop().await;
}

#[tokio::test]
async fn e2e_generate_transport_error_is_bad_gateway() {
    let mock = Arc::new(MockLlm::with_service_error("error sending request: connection refused"));
    let server = common::spawn_with_mock(mock).await;

    let (status, body) = common::post_generate(&server, "previsão de demanda para 2030").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let err: ErrorBody = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, "generation_failure");
    assert!(err.error.contains("connection refused"), "{}", err.error);

    server.stop().await;
}

#[tokio::test]
async fn e2e_generate_without_credential_is_unavailable() {
    let server = common::spawn_without_credential().await;

    let (status, body) = common::post_generate(&server, "fluxo de carga").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let err: ErrorBody = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, "missing_credential");

    server.stop().await;
}

#[tokio::test]
async fn e2e_invalid_json_is_rejected() {
    let server = common::spawn_with_mock(Arc::new(MockLlm::with_content("unused"))).await;

    let resp = reqwest::Client::new()
        .post(server.url("/api/generate"))
        .header("content-type", "application/json")
        .body("not valid json")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_client_error(), "status {}", resp.status());

    server.stop().await;
}

#[tokio::test]
async fn e2e_topics_in_catalog_order() {
    let server = common::spawn_with_mock(Arc::new(MockLlm::with_content("unused"))).await;

    let topics: Vec<TopicRef> = reqwest::get(server.url("/api/topics"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let ids: Vec<&str> = topics.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["otimizacao_fluxo_carga", "previsao_demanda_energia"]);

    server.stop().await;
}
