use crate::error::Error;
use crate::message::{Address, Request, Response};
use crate::token::Op;
use crate::unit::OperatorUnit;
use hashbrown::HashMap;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Carries requests to operator units and their responses back.
///
/// `recv` blocks until a response is available. A channel is only ever used
/// by one evaluator at a time, which issues a single request and waits for
/// its response before sending the next one.
pub trait Channel {
    /// Deliver `request` to the unit it is addressed to
    fn send(&mut self, request: Request) -> Result<(), Error>;
    /// Wait for the next response
    fn recv(&mut self) -> Result<Response, Error>;
}

fn unit_op(request: &Request) -> Result<Op, Error> {
    match request.receiver {
        Address::Unit(op) => Ok(op),
        Address::Evaluator => Err(Error::ProtocolError(format!(
            "request {} is not addressed to an operator unit",
            request.request_id
        ))),
    }
}

/// Drives the units on the caller thread: `send` lets the receiving unit
/// process the request right away and queues its response in an inbox that
/// `recv` drains.
#[derive(Debug)]
pub struct InlineChannel {
    units: HashMap<Op, OperatorUnit>,
    inbox: VecDeque<Response>,
}

impl Default for InlineChannel {
    fn default() -> Self {
        let units = Op::ALL
            .iter()
            .map(|&op| (op, OperatorUnit::for_op(op)))
            .collect();
        Self {
            units,
            inbox: VecDeque::new(),
        }
    }
}

impl InlineChannel {
    /// Create a channel connected to one unit per operator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Channel for InlineChannel {
    fn send(&mut self, request: Request) -> Result<(), Error> {
        let op = unit_op(&request)?;
        let unit = self
            .units
            .get(&op)
            .ok_or_else(|| Error::ProtocolError(format!("no unit for operator '{}'", op)))?;
        self.inbox.push_back(unit.handle(&request));
        Ok(())
    }

    fn recv(&mut self) -> Result<Response, Error> {
        self.inbox
            .pop_front()
            .ok_or_else(|| Error::ProtocolError("no response was received".into()))
    }
}

/// Runs every unit on its own worker thread. Requests go through one channel
/// per unit; all units answer on a single shared response channel.
///
/// Dropping the channel stops and joins the workers.
pub struct ThreadedChannel {
    units: HashMap<Op, Sender<Request>>,
    responses: Receiver<Response>,
    workers: Vec<JoinHandle<()>>,
}

impl ThreadedChannel {
    /// Spawn one worker per operator unit
    pub fn new() -> Result<Self, Error> {
        let (reply, responses) = mpsc::channel();
        let mut units = HashMap::new();
        let mut workers = Vec::with_capacity(Op::ALL.len());

        for &op in &Op::ALL {
            let unit = OperatorUnit::for_op(op);
            let (sender, requests) = mpsc::channel::<Request>();
            let reply = reply.clone();
            let worker = thread::Builder::new()
                .name(format!("relaycalc-{:?}", unit).to_lowercase())
                .spawn(move || serve(unit, &requests, &reply))
                .map_err(|err| {
                    Error::ProtocolError(format!("could not start {}: {}", unit.address(), err))
                })?;
            debug!("started worker for {}", unit.address());
            units.insert(op, sender);
            workers.push(worker);
        }

        Ok(Self {
            units,
            responses,
            workers,
        })
    }
}

fn serve(unit: OperatorUnit, requests: &Receiver<Request>, reply: &Sender<Response>) {
    for request in requests {
        if reply.send(unit.handle(&request)).is_err() {
            break;
        }
    }
    trace!("worker for {} stopped", unit.address());
}

impl Channel for ThreadedChannel {
    fn send(&mut self, request: Request) -> Result<(), Error> {
        let op = unit_op(&request)?;
        let sender = self
            .units
            .get(&op)
            .ok_or_else(|| Error::ProtocolError(format!("no unit for operator '{}'", op)))?;
        sender.send(request).map_err(|_| {
            Error::ProtocolError(format!("{} is not running", Address::Unit(op)))
        })
    }

    fn recv(&mut self) -> Result<Response, Error> {
        self.responses
            .recv()
            .map_err(|_| Error::ProtocolError("all operator units have stopped".into()))
    }
}

impl Drop for ThreadedChannel {
    fn drop(&mut self) {
        // closing the request channels ends the worker loops
        self.units.clear();
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                warn!("an operator unit worker panicked");
            }
        }
    }
}
