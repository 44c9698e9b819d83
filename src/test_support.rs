//! Scripted collaborators for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::task::Poll;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::net::transport::{HttpRequest, HttpResponse, Navigator, Transport, TransportError};
use crate::net::types::{Article, ArticleAuthor, AuthorRef, UserSummary};
use crate::services::Services;
use crate::session::state::Session;
use crate::session::store::MemoryStore;

pub const BASE_URL: &str = "http://api.test";

type Reply = Result<HttpResponse, TransportError>;

/// Replies from a FIFO of canned results and records every request.
///
/// The request is recorded when `send` is called, before the reply future is
/// polled, so concurrent requests see their replies in call order.
///
/// After [`MockTransport::hold_replies`], each request stays in flight until
/// the test releases it, which lets several requests overlap.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<HttpRequest>>,
    holding: Cell<bool>,
    in_flight: RefCell<VecDeque<oneshot::Sender<Reply>>>,
}

impl MockTransport {
    /// Park every later request until `release_oldest`/`release_newest`.
    pub fn hold_replies(&self) {
        self.holding.set(true);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.borrow().len()
    }

    /// Answer the earliest parked request.
    pub fn release_oldest(&self, status: u16, body: serde_json::Value) {
        let waiter = self.in_flight.borrow_mut().pop_front().expect("no request in flight");
        let _ = waiter.send(Ok(HttpResponse { status, body: body.to_string() }));
    }

    /// Answer the most recently parked request.
    pub fn release_newest(&self, status: u16, body: serde_json::Value) {
        let waiter = self.in_flight.borrow_mut().pop_back().expect("no request in flight");
        let _ = waiter.send(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn reply(&self, status: u16, body: serde_json::Value) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn reply_empty(&self, status: u16) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: String::new() }));
    }

    pub fn fail(&self, message: &str) {
        self.replies.borrow_mut().push_back(Err(TransportError(message.to_owned())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.borrow().last().cloned().expect("no request was sent")
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'_, Result<HttpResponse, TransportError>> {
        self.requests.borrow_mut().push(request);
        if self.holding.get() {
            let (waiter, reply) = oneshot::channel();
            self.in_flight.borrow_mut().push_back(waiter);
            return Box::pin(async move {
                reply.await.unwrap_or_else(|_| Err(TransportError("reply dropped".to_owned())))
            });
        }
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())));
        Box::pin(async move { reply })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}

/// Store, transport, navigator and the services wired over them.
pub struct Fixture {
    pub store: Rc<MemoryStore>,
    pub transport: Rc<MockTransport>,
    pub navigator: Rc<RecordingNavigator>,
    pub services: Services,
}

impl Fixture {
    pub fn new() -> Self {
        let store = Rc::new(MemoryStore::new());
        let transport = Rc::new(MockTransport::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let services = Services::new(
            ClientConfig::with_base_url(BASE_URL),
            store.clone(),
            transport.clone(),
            navigator.clone(),
        );
        Self { store, transport, navigator, services }
    }

    pub fn client(&self) -> &ApiClient {
        &self.services.client
    }

    pub fn session(&self) -> &Session {
        self.services.client.session()
    }
}

/// Return `Pending` once so sibling futures in a `join!` get polled.
pub async fn yield_now() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}

pub fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

pub fn make_user(id: &str, username: &str) -> UserSummary {
    UserSummary {
        id: id.to_owned(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        full_name: None,
        avatar_url: None,
        bio: None,
        created_at: "2024-03-05T10:00:00Z".to_owned(),
    }
}

pub fn make_article(id: &str, author: &str) -> Article {
    Article {
        id: id.to_owned(),
        author: Some(AuthorRef::User(ArticleAuthor {
            id: format!("id-{author}"),
            username: author.to_owned(),
            full_name: None,
            avatar_url: None,
        })),
        title: format!("Article {id}"),
        content: "Body".to_owned(),
        excerpt: None,
        status: None,
        is_published: None,
        likes_count: 0,
        views_count: 0,
        created_at: "2024-03-05T10:00:00Z".to_owned(),
        updated_at: "2024-03-05T10:00:00Z".to_owned(),
    }
}
