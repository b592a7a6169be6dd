use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AnalyzeError, ShapeProblem};
use crate::model::SalesData;

/// Top-level keys every dataset must carry, in load order.
pub const COLLECTIONS: [&str; 4] = ["customers", "sellers", "products", "purchase_records"];

/// Parse a JSON dataset, checking the four collections before their elements.
///
/// Shape problems (missing key, not an array, empty array) are reported per
/// collection, in [`COLLECTIONS`] order, before any element is deserialized.
pub fn load_sales_json(json: &str) -> Result<SalesData, AnalyzeError> {
    let root: Value = serde_json::from_str(json).map_err(|e| AnalyzeError::DataParse {
        collection: "dataset",
        message: e.to_string(),
    })?;

    let Value::Object(mut root) = root else {
        return Err(AnalyzeError::DataParse {
            collection: "dataset",
            message: "top-level value must be an object".into(),
        });
    };

    for name in COLLECTIONS {
        match root.get(name) {
            None | Some(Value::Null) => {
                return Err(AnalyzeError::InputShape { collection: name, problem: ShapeProblem::Missing })
            }
            Some(Value::Array(items)) if items.is_empty() => {
                return Err(AnalyzeError::InputShape { collection: name, problem: ShapeProblem::Empty })
            }
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(AnalyzeError::InputShape {
                    collection: name,
                    problem: ShapeProblem::NotSequence,
                })
            }
        }
    }

    Ok(SalesData {
        customers: take_collection(&mut root, "customers")?,
        sellers: take_collection(&mut root, "sellers")?,
        products: take_collection(&mut root, "products")?,
        purchase_records: take_collection(&mut root, "purchase_records")?,
    })
}

fn take_collection<T: DeserializeOwned>(
    root: &mut serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<Vec<T>, AnalyzeError> {
    let value = root.remove(name).unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| AnalyzeError::DataParse {
        collection: name,
        message: e.to_string(),
    })
}
