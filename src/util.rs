use crate::token::Op;
use hashbrown::HashMap;

lazy_static! {
    /// Operator symbols accepted in the input, and the operator they stand for
    pub static ref OPERATORS: HashMap<char, Op> = {
        let mut map = HashMap::<char, Op>::new();
        for op in &Op::ALL {
            map.insert(op.symbol(), *op);
        }
        map.shrink_to_fit();
        map
    };
}
