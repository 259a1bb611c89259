//! Hand-off point for routes produced off the frame loop.

use std::sync::mpsc::{Receiver, Sender, channel};

use gd_core::GeoPoint;

/// Cloneable handle an asynchronous loader uses to deliver route geometry.
///
/// Delivered routes are installed at the start of the next frame; if several
/// arrive between two frames only the last one is used.
#[derive(Clone, Debug)]
pub struct RouteSender(Sender<Vec<GeoPoint>>);

impl RouteSender {
    /// Queue `coords` for installation.  Returns `false` if the simulation
    /// has been dropped.
    pub fn send(&self, coords: Vec<GeoPoint>) -> bool {
        self.0.send(coords).is_ok()
    }
}

#[derive(Debug)]
pub(crate) struct RouteInbox {
    tx: Sender<Vec<GeoPoint>>,
    rx: Receiver<Vec<GeoPoint>>,
}

impl RouteInbox {
    pub(crate) fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    pub(crate) fn sender(&self) -> RouteSender {
        RouteSender(self.tx.clone())
    }

    /// Drain everything delivered so far and keep the newest route.
    pub(crate) fn latest(&self) -> Option<Vec<GeoPoint>> {
        self.rx.try_iter().last()
    }
}
