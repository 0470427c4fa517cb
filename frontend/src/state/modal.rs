use std::rc::Rc;

use yew::prelude::*;

use crate::error::SiteError;

/// Whether the demo request overlay is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    Close,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let is_open = matches!(action, ModalAction::Open);
        if self.is_open == is_open {
            return self;
        }
        Rc::new(ModalState { is_open })
    }
}

/// Handle to the page's modal state. Created once by the root component and
/// passed down through props to every view that opens or closes the overlay.
#[derive(Clone, PartialEq)]
pub struct ModalStore {
    handle: UseReducerHandle<ModalState>,
}

impl ModalStore {
    pub fn is_open(&self) -> bool {
        self.handle.is_open
    }

    pub fn open(&self) {
        log::info!("Opening demo request modal");
        self.handle.dispatch(ModalAction::Open);
    }

    pub fn close(&self) {
        self.handle.dispatch(ModalAction::Close);
    }

    pub fn close_callback(&self) -> Callback<()> {
        let store = self.clone();
        Callback::from(move |_| store.close())
    }
}

#[hook]
pub fn use_modal_store() -> ModalStore {
    let handle = use_reducer(ModalState::default);
    ModalStore { handle }
}

/// Resolves a store that a consumer expects to have been threaded to it.
pub fn require_store<'a, T>(
    store: Option<&'a T>,
    consumer: &'static str,
) -> Result<&'a T, SiteError> {
    store.ok_or(SiteError::ContextUnavailable { consumer })
}
