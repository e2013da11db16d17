// Module exports for the arrangement policy
pub mod order;      // Tab ordering logic
pub mod close;      // Close selection logic
pub mod command;    // Composite sort/close command
pub mod listener;   // Load/save/activate triggers
