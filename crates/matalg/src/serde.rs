use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::matrix::Matrix;

impl serde::Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("rows", &self.rows())?;
        state.serialize_field("cols", &self.cols())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData {
            rows: usize,
            cols: usize,
            data: Vec<f64>,
        }

        let MatrixData { rows, cols, data } = MatrixData::deserialize(deserializer)?;

        // route through the checked constructor so shape and capacity are validated
        Matrix::from_shape_vec(rows, cols, data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        let serialized = serde_json::to_string(&m)?;
        assert_eq!(
            serialized,
            r#"{"rows":2,"cols":3,"data":[1.0,2.0,3.0,4.0,5.0,6.0]}"#
        );
        let deserialized: Matrix = serde_json::from_str(&serialized)?;
        assert_eq!(m, deserialized);
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_bad_shape() {
        let res = serde_json::from_str::<Matrix>(r#"{"rows":2,"cols":2,"data":[1.0]}"#);
        assert!(res.is_err());

        let res = serde_json::from_str::<Matrix>(r#"{"rows":11,"cols":0,"data":[]}"#);
        assert!(res.is_err());
    }
}
