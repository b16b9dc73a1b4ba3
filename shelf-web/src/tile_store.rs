//! Yew reducer over the engine's [`TileState`].
//!
//! Every DOM handler funnels into one [`TileAction`]; the reducer applies it and
//! only hands Yew a new state when something actually changed.
use shelf_engine::{Product, TileAction, TileConfig, TileState, TileView, Transition};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TileStore {
    state: Rc<TileState>,
}

impl TileStore {
    #[must_use]
    pub fn new(product: Rc<Product>, config: Rc<TileConfig>) -> Self {
        Self {
            state: Rc::new(TileState::new(product, config)),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &Rc<TileState> {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> TileView {
        self.state.view()
    }
}

impl Reducible for TileStore {
    type Action = TileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self.state).clone();
        match next.apply(action) {
            Transition::Changed => Rc::new(Self {
                state: Rc::new(next),
            }),
            Transition::Unchanged => self,
            Transition::Rejected(reason) => {
                log::debug!("tile {}: {reason}", self.state.product().id);
                self
            }
        }
    }
}

/// Handle to one tile's state plus a dispatcher shared by both of its views.
#[derive(Clone, PartialEq)]
pub struct TileHandle {
    pub store: UseReducerHandle<TileStore>,
    pub dispatch: Callback<TileAction>,
}

impl TileHandle {
    #[must_use]
    pub fn state(&self) -> Rc<TileState> {
        Rc::clone(self.store.state())
    }

    #[must_use]
    pub fn view(&self) -> TileView {
        self.store.view()
    }
}

/// Tile state scoped to the component mount.
///
/// The product is read-only for the widget's lifetime; give the component a new
/// `key` to start over with a different product.
#[hook]
pub fn use_tile(product: Rc<Product>, config: Rc<TileConfig>) -> TileHandle {
    let store = use_reducer_eq(move || TileStore::new(product, config));
    let dispatch = {
        let dispatcher = store.dispatcher();
        use_callback((), move |action: TileAction, _| dispatcher.dispatch(action))
    };
    TileHandle { store, dispatch }
}
