// TabFinder state managers
// Managers hold state across events: the tab index, its timestamp store, the selection, and the popup dispatcher.

pub mod popup_dispatcher;
pub mod selection_controller;
pub mod tab_index;
pub mod timestamp_store;
