//! Streaming primitives for delivering scan results across threads.
//!
//! Background workers produce payloads on their own thread and hand them to a
//! consumer through a bounded [`mpsc`] channel. Every payload travels inside an
//! [`Envelope`] tagged with the generation number of the session that produced
//! it, so a consumer that has since moved on can recognise and discard stale
//! output on arrival instead of tearing the producer down.
//!
//! The channel is bounded: a producer that outruns its consumer blocks on
//! [`StreamSender::send`] rather than queueing unboundedly. The consumer drains
//! the receiver on its own schedule and observes payloads in emission order.
//!
//! ```
//! use dirview_stream::channel;
//!
//! let (tx, rx) = channel::<&str>(4, 7);
//! assert!(tx.send("first"));
//! assert!(tx.send("second"));
//!
//! let envelope = rx.recv().unwrap();
//! assert_eq!(envelope.generation, 7);
//! assert_eq!(envelope.payload, "first");
//! assert_eq!(rx.recv().unwrap().payload, "second");
//! ```
//!
//! [`mpsc`]: std::sync::mpsc

use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

/// Message emitted by a background producer and delivered to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<P> {
	/// Generation of the session that produced this payload.
	pub generation: u64,
	/// Payload delivered to the consumer.
	pub payload: P,
}

/// Producer half of a bounded stream, tagging every payload with its
/// generation.
///
/// Owned by the worker thread; cloning yields another producer for the same
/// channel and generation.
#[derive(Debug)]
pub struct StreamSender<P> {
	tx: SyncSender<Envelope<P>>,
	generation: u64,
}

impl<P> StreamSender<P> {
	/// Generation stamped onto every payload sent through this handle.
	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Deliver a payload to the consumer, blocking while the channel is full.
	///
	/// Returns `false` when the consumer has dropped its receiver; producers
	/// should treat that as a request to wind down.
	pub fn send(&self, payload: P) -> bool {
		self.tx
			.send(Envelope {
				generation: self.generation,
				payload,
			})
			.is_ok()
	}
}

impl<P> Clone for StreamSender<P> {
	fn clone(&self) -> Self {
		Self {
			tx: self.tx.clone(),
			generation: self.generation,
		}
	}
}

/// Create a bounded stream for the given session generation.
///
/// `capacity` is the number of envelopes that may sit in the channel before
/// [`StreamSender::send`] blocks.
#[must_use]
pub fn channel<P>(capacity: usize, generation: u64) -> (StreamSender<P>, Receiver<Envelope<P>>) {
	let (tx, rx) = sync_channel(capacity);
	(StreamSender { tx, generation }, rx)
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;

	#[test]
	fn payloads_arrive_in_emission_order() {
		let (tx, rx) = channel(8, 1);
		let producer = thread::spawn(move || {
			for value in 0..5 {
				assert!(tx.send(value));
			}
		});

		let received: Vec<i32> = rx.iter().map(|envelope| envelope.payload).collect();
		producer.join().unwrap();
		assert_eq!(received, vec![0, 1, 2, 3, 4]);
	}

	#[test]
	fn envelopes_carry_the_session_generation() {
		let (tx, rx) = channel(1, 42);
		assert_eq!(tx.generation(), 42);
		assert!(tx.send("payload"));
		let envelope = rx.recv().unwrap();
		assert_eq!(envelope.generation, 42);
	}

	#[test]
	fn send_reports_a_dropped_receiver() {
		let (tx, rx) = channel(1, 1);
		drop(rx);
		assert!(!tx.send("ignored"));
	}

	#[test]
	fn cloned_senders_share_the_channel() {
		let (tx, rx) = channel(4, 3);
		let other = tx.clone();
		assert!(tx.send(1));
		assert!(other.send(2));
		drop(tx);
		drop(other);

		let payloads: Vec<i32> = rx.iter().map(|envelope| envelope.payload).collect();
		assert_eq!(payloads, vec![1, 2]);
	}

}
