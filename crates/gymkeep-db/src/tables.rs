use redb::TableDefinition;

/// Table for storing members.
/// Key: member id
/// Value: serialized Member as JSON bytes
pub const MEMBERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("members");

/// Table for storing gym classes.
/// Key: class id
/// Value: serialized GymClass as JSON bytes
pub const GYM_CLASSES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("gym_classes");

/// Table for storing trainers.
/// Key: trainer id
/// Value: serialized Trainer as JSON bytes
pub const TRAINERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("trainers");

/// Every table the service needs, in creation order.
pub const ALL_TABLES: [TableDefinition<&str, &[u8]>; 3] =
    [MEMBERS_TABLE, GYM_CLASSES_TABLE, TRAINERS_TABLE];
