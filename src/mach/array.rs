use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

const MAX_ELEMENTS: usize = 1 << 24;

/// Arrays of one to three dimensions. A dimension declared as `n`
/// holds `n + 1` elements, indexed 0 through `n`.
#[derive(Debug, Clone)]
pub struct Array {
    dims: Vec<usize>,
    data: Vec<Val>,
}

impl Array {
    pub fn new(name: &str, sizes: &[Val]) -> Result<Array> {
        if sizes.is_empty() {
            return Err(error!(SyntaxError; "ZERO DIMENSIONAL ARRAY"));
        }
        if sizes.len() > 3 {
            return Err(error!(SyntaxError; "MAXIMUM NUMBER OF ARRAY DIMENSIONS IS THREE"));
        }
        let mut dims = Vec::with_capacity(sizes.len());
        let mut len: usize = 1;
        for size in sizes {
            let n = match size.integral()? {
                Some(n) if n < 0 => return Err(error!(SyntaxError; "NEGATIVE ARRAY SIZE")),
                Some(n) => n as usize,
                None => return Err(error!(SyntaxError; "FRACTIONAL ARRAY SIZE")),
            };
            len = match n.checked_add(1).and_then(|d| len.checked_mul(d)) {
                Some(len) if len <= MAX_ELEMENTS => len,
                _ => return Err(error!(OutOfMemory; "ARRAY TOO LARGE")),
            };
            dims.push(n + 1);
        }
        Ok(Array {
            dims,
            data: vec![Val::zero(name); len],
        })
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn get(&self, index: &[Val]) -> Result<Val> {
        let offset = self.offset(index)?;
        Ok(self.data[offset].clone())
    }

    pub fn set(&mut self, index: &[Val], val: Val) -> Result<()> {
        let offset = self.offset(index)?;
        self.data[offset] = val;
        Ok(())
    }

    /// Row-major offset of an element.
    fn offset(&self, index: &[Val]) -> Result<usize> {
        if index.len() != self.dims.len() {
            return Err(error!(SubscriptOutOfRange; "WRONG NUMBER OF SUBSCRIPTS"));
        }
        let mut offset = 0;
        for (val, &dim) in index.iter().zip(self.dims.iter()) {
            let i = match val.integral()? {
                Some(i) if i >= 0 && (i as usize) < dim => i as usize,
                Some(_) => return Err(error!(SubscriptOutOfRange)),
                None => return Err(error!(SubscriptOutOfRange; "FRACTIONAL SUBSCRIPT")),
            };
            offset = offset * dim + i;
        }
        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(v: &[i64]) -> Vec<Val> {
        v.iter().map(|&n| Val::Integer(n)).collect()
    }

    #[test]
    fn test_extra_slot() {
        let mut a = Array::new("A", &ints(&[2, 3])).unwrap();
        assert_eq!(a.rank(), 2);
        a.set(&ints(&[2, 3]), Val::Integer(9)).unwrap();
        assert_eq!(a.get(&ints(&[2, 3])).unwrap(), Val::Integer(9));
        assert_eq!(a.get(&ints(&[0, 0])).unwrap(), Val::Integer(0));
        assert!(a.get(&ints(&[3, 0])).is_err());
        assert!(a.get(&ints(&[-1, 0])).is_err());
        assert!(a.get(&ints(&[1])).is_err());
    }

    #[test]
    fn test_string_elements_start_empty() {
        let a = Array::new("N$", &ints(&[1])).unwrap();
        assert_eq!(a.get(&ints(&[1])).unwrap(), Val::String("".into()));
    }

    #[test]
    fn test_bad_dimensions() {
        assert!(Array::new("A", &[]).unwrap_err().is_syntax());
        assert!(Array::new("A", &ints(&[1, 1, 1, 1])).unwrap_err().is_syntax());
        assert!(Array::new("A", &ints(&[-1])).unwrap_err().is_syntax());
        assert!(Array::new("A", &[Val::Float(1.5)]).unwrap_err().is_syntax());
        assert!(!Array::new("A", &[Val::String("1".into())])
            .unwrap_err()
            .is_syntax());
    }
}
