/// An abstract syntax tree (AST) node representing an additive expression.
///
/// The tree is fully owned: every `BinaryOp` exclusively owns its two
/// children, so there is no sharing and no cycles. Positions are byte offsets
/// into the source text and are used for error reporting.
///
/// Left-folded chains make trees as deep as they are long, so comparing,
/// rendering, counting and dropping walk the tree with an explicit stack
/// instead of recursing.
pub enum Expr {
    /// An integer literal, either written directly or resolved from a
    /// variable.
    Literal {
        /// The constant value.
        value:    i64,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A binary operation (addition or subtraction).
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source text.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use sumexpr::ast::Expr;
    ///
    /// let expr = Expr::Literal { value:    42,
    ///                            position: 3, };
    ///
    /// assert_eq!(expr.position(), 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. } | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Counts the operator nodes in the tree.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        let mut count = 0;
        let mut nodes = vec![self];
        while let Some(node) = nodes.pop() {
            if let Self::BinaryOp { left, right, .. } = node {
                count += 1;
                nodes.push(&**left);
                nodes.push(&**right);
            }
        }
        count
    }

    /// Moves operator children out of `self`, leaving literals behind.
    fn detach_children(&mut self, into: &mut Vec<Self>) {
        if let Self::BinaryOp { left, right, .. } = self {
            for child in [left, right] {
                if matches!(**child, Self::BinaryOp { .. }) {
                    into.push(std::mem::replace(&mut **child,
                                                Self::Literal { value:    0,
                                                                position: 0, }));
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.detach_children(&mut detached);
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (Self::Literal { value: a,
                                 position: pa, },
                 Self::Literal { value: b,
                                 position: pb, }) => {
                    if a != b || pa != pb {
                        return false;
                    }
                },
                (Self::BinaryOp { op: op_a,
                                  left: left_a,
                                  right: right_a,
                                  position: pa, },
                 Self::BinaryOp { op: op_b,
                                  left: left_b,
                                  right: right_b,
                                  position: pb, }) => {
                    if op_a != op_b || pa != pb {
                        return false;
                    }
                    pairs.push((&**left_a, &**left_b));
                    pairs.push((&**right_a, &**right_b));
                },
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

/// Prints the infix rendering, which is safe for trees of any depth.
impl std::fmt::Debug for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Expr({self})")
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
        };
        write!(f, "{operator}")
    }
}

/// A pending piece of output while rendering an [`Expr`].
enum Piece<'a> {
    Node(&'a Expr),
    Operator(BinaryOperator),
    Close,
}

/// Renders the tree in fully parenthesised infix form, e.g. `((13 + 4) - 2)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { op, left, right, .. }) => {
                    f.write_str("(")?;
                    pieces.push(Piece::Close);
                    pieces.push(Piece::Node(&**right));
                    pieces.push(Piece::Operator(*op));
                    pieces.push(Piece::Node(&**left));
                },
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
