//! Session middleware.
//!
//! Loads the session named by the request cookie into the depot before the
//! handler runs, and writes it back afterwards if the handler modified it.

use std::sync::Arc;

use salvo::{http::ResBody, prelude::*};
use tracing::{debug, error};
use trolley::session::Session;
use trolley_app::sessions::SessionKey;

use crate::{
    sessions::cookie::{session_cookie, session_key},
    state::State,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state.clone(),
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let presented = session_key(req, &state.sessions.cookie_name);

    let (key, session) = match presented {
        Some(key) => match state.app.sessions.load(&key).await {
            Ok(Some(session)) => (Some(key), session),
            Ok(None) => (None, Session::new()),
            Err(source) => {
                error!("failed to load session: {source}");

                res.render(StatusError::internal_server_error());
                ctrl.skip_rest();

                return;
            }
        },
        None => (None, Session::new()),
    };

    depot.inject(session);

    ctrl.call_next(req, depot, res).await;

    let Ok(session) = depot.scrape::<Session>() else {
        return;
    };

    if !session.is_modified() {
        return;
    }

    let key = key.unwrap_or_else(|| {
        debug!("starting new session");

        SessionKey::generate()
    });

    if let Err(source) = state.app.sessions.save(&key, &session).await {
        error!("failed to save session: {source}");

        res.body(ResBody::None);
        res.render(StatusError::internal_server_error());

        return;
    }

    res.add_cookie(session_cookie(&key, &state.sessions));
}
