#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

/// Side length of one square maze cell when drawn, in pixels.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CellPixels(pub u32);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub u32);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub u32);
