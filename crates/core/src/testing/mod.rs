//! Mock implementations of external collaborators for testing.

mod mock_assistant;
mod mock_helpdesk;

pub use mock_assistant::MockAssistant;
pub use mock_helpdesk::{MockHelpdesk, RecordedTagWrite};
