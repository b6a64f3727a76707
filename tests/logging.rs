mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::{Fixture, body_text, get};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().map_err(|_| io::Error::other("lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[tokio::test]
async fn read_fault_detail_goes_to_the_log_not_the_body() {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let fixture = Fixture::new();
    fixture.remove("projects.json");

    let res = get(&fixture.router(), "/projects").await;

    assert_eq!(res.status_code(), 500);
    assert_eq!(body_text(&res), "Server error");

    let logged = sink.contents();
    assert!(logged.contains("request failed"), "log was: {logged}");
    assert!(logged.contains("projects.json"), "log was: {logged}");
    assert!(!body_text(&res).contains("projects.json"));
}

#[tokio::test]
async fn parse_fault_names_the_document_in_the_log() {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let fixture = Fixture::new();
    fixture.write_raw("experiences.json", "{ not json");

    let res = get(&fixture.router(), "/api/experiences").await;

    assert_eq!(res.status_code(), 500);
    assert_eq!(body_text(&res), "Server error");
    assert!(sink.contents().contains("experiences.json"));
}
