use validator::ValidationError;

use crate::constants::CELL_COUNT;

pub fn validate_cell(value: u32) -> Result<(), ValidationError> {
    if value == 0 {
        return Ok(());
    }
    if value < 2 || !value.is_power_of_two() {
        return Err(ValidationError::new("invalid_tile_value"));
    }
    Ok(())
}

/// Checks a flat row-major grid. Returns the index of the first bad cell.
pub fn validate_cells(cells: &[u32]) -> Result<(), (usize, ValidationError)> {
    if cells.len() != CELL_COUNT {
        return Err((cells.len().min(CELL_COUNT), ValidationError::new("invalid_board_size")));
    }
    for (index, &value) in cells.iter().enumerate() {
        validate_cell(value).map_err(|e| (index, e))?;
    }
    Ok(())
}
