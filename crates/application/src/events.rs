//! Publication of drained domain events.

use std::fmt::Display;

use domain::DomainEvent;

/// Publishes events drained from an aggregate as structured log records.
///
/// Each event increments `domain_events_published_total{event_type}`.
pub fn publish<E: DomainEvent>(aggregate_type: &'static str, aggregate_id: impl Display, events: Vec<E>) {
    for event in events {
        let event_type = event.event_type();
        match event.to_record() {
            Ok(record) => tracing::info!(
                event_type,
                event_id = %event.event_id(),
                aggregate_type,
                aggregate_id = %aggregate_id,
                occurred_at = %event.occurred_at(),
                record = %record,
                "Domain event published"
            ),
            Err(err) => tracing::warn!(
                event_type,
                error = %err,
                "Failed to serialize domain event"
            ),
        }
        metrics::counter!("domain_events_published_total", "event_type" => event_type).increment(1);
    }
}
