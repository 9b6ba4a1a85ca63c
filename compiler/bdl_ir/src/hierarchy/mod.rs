//! Module/pin netlist model.
//!
//! A [`Module`] exposes ports, owns child modules, and records nets: each
//! net is the list of pins it ties together. A pin is addressed by
//! [`PinRef`], whose `module` index is relative to the owning module:
//! `0` is the module itself, `i` is `children[i - 1]`.

use thiserror::Error;

/// Electrical role of a pin.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PinKind {
    Passive,
    Power,
    Input,
    PushPull,
    OpenDrain,
    TriState,
    AnalogInput,
    AnalogOutput,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pin {
    pub kind: PinKind,
    pub name: String,
}

impl Pin {
    pub fn new(kind: PinKind, name: impl Into<String>) -> Self {
        Pin {
            kind,
            name: name.into(),
        }
    }
}

/// Address of a pin, relative to the module that owns the net.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PinRef {
    pub module: usize,
    pub pin: usize,
}

impl PinRef {
    /// A port of the owning module.
    pub const fn port(pin: usize) -> Self {
        PinRef { module: 0, pin }
    }

    /// A port of `children[child]`.
    pub const fn child(child: usize, pin: usize) -> Self {
        PinRef {
            module: child + 1,
            pin,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum HierarchyError {
    #[error("net references module {module}, which does not exist")]
    UnknownModule { module: usize },
    #[error("net references pin {pin} of module {module}, which does not exist")]
    UnknownPin { module: usize, pin: usize },
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Module {
    pub ports: Vec<Pin>,
    pub nets: Vec<Vec<PinRef>>,
    pub children: Vec<Module>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a port; returns its index.
    pub fn add_port(&mut self, pin: Pin) -> usize {
        self.ports.push(pin);
        self.ports.len() - 1
    }

    /// Add a child module; returns the index to use in [`PinRef::child`].
    pub fn add_child(&mut self, child: Module) -> usize {
        self.children.push(child);
        self.children.len() - 1
    }

    /// The pin a reference points at, if it exists.
    pub fn resolve(&self, pin_ref: PinRef) -> Option<&Pin> {
        let owner = match pin_ref.module {
            0 => self,
            n => self.children.get(n - 1)?,
        };
        owner.ports.get(pin_ref.pin)
    }

    /// Record a net tying `pins` together; returns its index.
    ///
    /// Every reference is checked first: a net with a dangling reference
    /// is rejected as a whole.
    pub fn connect(&mut self, pins: Vec<PinRef>) -> Result<usize, HierarchyError> {
        for &pin_ref in &pins {
            if pin_ref.module > self.children.len() {
                return Err(HierarchyError::UnknownModule {
                    module: pin_ref.module,
                });
            }
            if self.resolve(pin_ref).is_none() {
                return Err(HierarchyError::UnknownPin {
                    module: pin_ref.module,
                    pin: pin_ref.pin,
                });
            }
        }
        self.nets.push(pins);
        Ok(self.nets.len() - 1)
    }
}
