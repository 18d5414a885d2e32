use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;
use std::time::Duration;

use heritage_classifier::{
    ClassifierBackend, ClassifyError, CraftLabel, HttpClassifier, HttpClassifierConfig,
    ImageInput, Origin, Workflow, WorkflowState, GENERIC_FAILURE_MESSAGE,
};

fn jpeg_input() -> ImageInput {
    let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0xFF, 0xD9];
    ImageInput::new(bytes, Origin::Camera).expect("valid jpeg payload")
}

/// Serve exactly one HTTP exchange with a canned response and hand back the
/// captured request bytes.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
    let addr = listener.local_addr().expect("fixture addr");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let join = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("read timeout");
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).expect("write response");
        request
    });
    (format!("http://{}/predict", addr), join)
}

/// Read headers plus a Content-Length body, enough for the fixture.
fn read_request(stream: &mut std::net::TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let read = stream.read(&mut chunk).expect("read request");
        request.extend_from_slice(&chunk[..read]);
        if let Some(pos) = request.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        assert!(read > 0, "request ended before headers completed");
    };

    let headers = String::from_utf8_lossy(&request[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    while request.len() < header_end + content_length {
        let read = stream.read(&mut chunk).expect("read body");
        assert!(read > 0, "request body truncated");
        request.extend_from_slice(&chunk[..read]);
    }
    request
}

fn classifier(url: String) -> HttpClassifier {
    HttpClassifier::new(HttpClassifierConfig {
        url,
        timeout: Duration::from_secs(5),
    })
}

#[test]
fn top1_only_response_is_accepted() {
    let (url, join) = serve_once("200 OK", r#"{"class":"tapis","confidence":0.73}"#);
    let mut backend = classifier(url);

    let raw = backend.classify(&jpeg_input()).expect("classify");
    assert_eq!(raw.class, CraftLabel::Tapis);
    assert_eq!(raw.confidence, 0.73);
    assert!(raw.top3.is_none());

    let request = join.join().expect("fixture thread");
    let text = String::from_utf8_lossy(&request);
    assert!(text.contains("POST /predict"));
    assert!(text.contains("multipart/form-data; boundary="));
    assert!(text.contains("name=\"file\""));
    assert!(text.contains("filename=\"camera.jpg\""));
    assert!(text.contains("Content-Type: image/jpeg"));
}

#[test]
fn response_with_ranking_is_accepted() {
    let (url, join) = serve_once(
        "200 OK",
        r#"{"class":"zellige","confidence":0.91,"top3":[{"class":"zellige","confidence":0.91},{"class":"tapis","confidence":0.05}]}"#,
    );
    let mut backend = classifier(url);

    let raw = backend.classify(&jpeg_input()).expect("classify");
    let top3 = raw.top3.expect("server ranking");
    assert_eq!(top3.len(), 2);
    assert_eq!(top3[1].class, CraftLabel::Tapis);
    join.join().expect("fixture thread");
}

#[test]
fn server_diagnostic_is_surfaced_verbatim() {
    let (url, join) = serve_once("500 Internal Server Error", "model unavailable");
    let mut backend = classifier(url);

    let err = backend.classify(&jpeg_input()).expect_err("server error");
    match &err {
        ClassifyError::Server { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "model unavailable");
        }
        other => panic!("expected Server error, got {:?}", other),
    }
    assert_eq!(err.user_message(), "model unavailable");
    join.join().expect("fixture thread");
}

#[test]
fn empty_error_body_falls_back_to_generic_message() {
    let (url, join) = serve_once("500 Internal Server Error", "");
    let mut backend = classifier(url);

    let err = backend.classify(&jpeg_input()).expect_err("server error");
    match &err {
        ClassifyError::Server { message, .. } => {
            assert!(!message.is_empty());
            assert_eq!(message, GENERIC_FAILURE_MESSAGE);
        }
        other => panic!("expected Server error, got {:?}", other),
    }
    join.join().expect("fixture thread");
}

#[test]
fn unparseable_body_is_a_parse_error() {
    let (url, join) = serve_once("200 OK", "definitely not json");
    let mut backend = classifier(url);

    let err = backend.classify(&jpeg_input()).expect_err("parse error");
    assert!(matches!(err, ClassifyError::Parse(_)));
    join.join().expect("fixture thread");
}

#[test]
fn missing_required_fields_are_a_parse_error() {
    let (url, join) = serve_once("200 OK", r#"{"confidence":0.5}"#);
    let mut backend = classifier(url);

    let err = backend.classify(&jpeg_input()).expect_err("parse error");
    assert!(matches!(err, ClassifyError::Parse(_)));
    join.join().expect("fixture thread");
}

#[test]
fn unreachable_endpoint_is_a_network_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let mut backend = classifier(format!("http://{}/predict", addr));
    let err = backend.classify(&jpeg_input()).expect_err("network error");
    assert!(matches!(err, ClassifyError::Network(_)));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn workflow_surfaces_server_diagnostic_in_failed_state() {
    let (url, join) = serve_once("500 Internal Server Error", "model unavailable");
    let mut backend = classifier(url);

    let mut workflow = Workflow::new();
    workflow.select_image(jpeg_input());
    let err = workflow.submit(&mut backend).expect_err("failed attempt");
    assert!(matches!(err, ClassifyError::Server { .. }));

    match workflow.state() {
        WorkflowState::Failed { message, .. } => assert_eq!(message, "model unavailable"),
        other => panic!("expected Failed state, got {:?}", other),
    }
    join.join().expect("fixture thread");
}
