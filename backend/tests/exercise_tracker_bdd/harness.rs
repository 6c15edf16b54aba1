//! Server harness and shared world for the exercise tracker scenarios.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` stops the server
//! even if a scenario panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::error::PayloadError;
use actix_web::web::Bytes;
use actix_web::{App, HttpServer, web};
use awc::Client;
use exercise_tracker::Trace;
use exercise_tracker::domain::{ExerciseLogService, UserDirectoryService};
use exercise_tracker::inbound::http::api_scope;
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::middleware::TRACE_ID_HEADER;
use exercise_tracker::outbound::memory::InMemoryStore;
use futures_util::Stream;
use mockable::DefaultClock;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) struct TrackerWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) user_id: Option<String>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) last_body: Option<Value>,
}

pub(crate) type SharedWorld = Rc<RefCell<TrackerWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

fn shutdown(world: SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it; the future must
    // not try to lock the world.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

/// A decoded reply from the server under test.
pub(crate) struct Reply {
    pub(crate) status: u16,
    pub(crate) trace_id: Option<String>,
    pub(crate) body: Value,
}

async fn read_reply<S>(mut response: awc::ClientResponse<S>, label: &str) -> Reply
where
    S: Stream<Item = Result<Bytes, PayloadError>> + Unpin,
{
    let status = response.status().as_u16();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned());
    let body = response.body().await.expect(label);
    let body: Value = serde_json::from_slice(&body).expect(label);
    Reply {
        status,
        trace_id,
        body,
    }
}

/// POST a urlencoded form to `path` and record the reply.
pub(crate) fn post_form(world: &SharedWorld, path: &str, form: &[(&str, &str)]) -> Reply {
    let form: Vec<(String, String)> = form
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    let reply = with_world_async(world, |base_url| async move {
        let response = Client::default()
            .post(format!("{base_url}{path}"))
            .send_form(&form)
            .await
            .expect("form request");
        read_reply(response, "form request").await
    });
    record(world, &reply);
    reply
}

/// GET `path` and record the reply.
pub(crate) fn get(world: &SharedWorld, path: &str) -> Reply {
    let reply = with_world_async(world, |base_url| async move {
        let response = Client::default()
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("get request");
        read_reply(response, "get request").await
    });
    record(world, &reply);
    reply
}

fn record(world: &SharedWorld, reply: &Reply) {
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(reply.status);
    ctx.last_trace_id = reply.trace_id.clone();
    ctx.last_body = Some(reply.body.clone());
}

async fn spawn_tracker_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let store = Arc::new(InMemoryStore::new());
    let http_state = web::Data::new(HttpState::new(
        Arc::new(UserDirectoryService::new(store.clone())),
        Arc::new(ExerciseLogService::new(
            store.clone(),
            store,
            Arc::new(DefaultClock),
        )),
    ));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .wrap(Trace)
            .service(api_scope())
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    let (base_url, server) = local
        .block_on(&runtime, spawn_tracker_server())
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(TrackerWorld {
            runtime,
            local,
            base_url,
            server,
            user_id: None,
            last_status: None,
            last_trace_id: None,
            last_body: None,
        })),
    }
}
