use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SaveError>;

/// Errors produced while parsing console transcripts and `.ttp` save records.
#[derive(Debug, Error)]
pub enum SaveError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Vector field text carried no `=` between name and body.
	#[error("vector field has no '=' delimiter: {field}")]
	VectorMissingDelimiter {
		/// Raw field text as received.
		field: String,
	},
	/// Vector body did not contain exactly three components.
	#[error("vector field {field} has {count} components, expected 3")]
	VectorArity {
		/// Field name portion of the input.
		field: String,
		/// Number of whitespace-separated components found.
		count: usize,
	},
	/// Vector component was not a valid float.
	#[error("vector field {field} has non-numeric component {piece:?}")]
	VectorComponent {
		/// Field name portion of the input.
		field: String,
		/// Offending component text.
		piece: String,
	},
	/// Registry marker never occurred in the save blob.
	#[error("marker not found in save record: {marker}")]
	MarkerNotFound {
		/// Marker name from the field registry.
		marker: String,
	},
	/// Player element in the identity listing lacked a required attribute.
	#[error("players index entry missing attribute {attr}")]
	PlayersIndexAttribute {
		/// Name of the missing attribute.
		attr: &'static str,
	},
}
