//! Session state container shared through context.
//!
//! One [`SessionStore`] lives above the router for the life of the page.
//! Components dispatch [`workflow::Event`]s through the handle; every state
//! transition goes through [`workflow::SessionState::reduce`].

use std::rc::Rc;

use workflow::{Event, Page, SessionState};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionStore {
    pub state: SessionState,
}

impl Reducible for SessionStore {
    type Action = Event;

    fn reduce(self: Rc<Self>, action: Event) -> Rc<Self> {
        Rc::new(SessionStore {
            state: self.state.reduce(action),
        })
    }
}

pub type SessionHandle = UseReducerHandle<SessionStore>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_reducer(SessionStore::default);

    html! {
        <ContextProvider<SessionHandle> context={store}>
            { props.children.clone() }
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider must wrap the application")
}

/// Marks `page` active in the session state.
///
/// Dispatched from the layout whenever the routed page changes, which clears
/// the transient workflow state and dataset selection and bumps the
/// submission epoch; the accumulated prediction history survives. Scroll
/// position resets so the new page starts at the top.
#[hook]
pub fn use_active_page(page: Page) {
    let session = use_session();

    use_effect_with(page, move |page| {
        if session.state.page != *page {
            log::debug!("Active page changed to {:?}", page);
            session.dispatch(Event::Navigate(*page));
        }

        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }

        || ()
    });
}
