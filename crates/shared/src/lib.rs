use serde::{Deserialize, Serialize};

/// Ось выдавливания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Axis {
    /// Ширина
    X,
    /// Высота
    Y,
    /// Глубина
    Z,
}

impl Axis {
    /// Все оси в порядке X, Y, Z
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Индекс компоненты вектора (0, 1, 2)
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Имя размера, который меняет эта ось
    pub fn dimension_name(self) -> &'static str {
        match self {
            Axis::X => "width",
            Axis::Y => "height",
            Axis::Z => "depth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Размеры параллелепипеда (один угол всегда в начале координат)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for BoxDimensions {
    fn default() -> Self {
        Self::UNIT
    }
}

impl BoxDimensions {
    /// Единичный куб 1×1×1
    pub const UNIT: BoxDimensions = BoxDimensions {
        width: 1.0,
        height: 1.0,
        depth: 1.0,
    };

    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self { width, height, depth }
    }

    /// Размер вдоль оси
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
        }
    }

    /// Копия с заменой одного размера
    pub fn with_axis(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => self.width = value,
            Axis::Y => self.height = value,
            Axis::Z => self.depth = value,
        }
        self
    }

    /// Ограничить каждый размер снизу значением `min`.
    /// Нечисловые значения (NaN, ±inf) тоже заменяются на `min`.
    pub fn clamped(self, min: f64) -> Self {
        let fix = |v: f64| if v.is_finite() { v.max(min) } else { min };
        Self {
            width: fix(self.width),
            height: fix(self.height),
            depth: fix(self.depth),
        }
    }

    /// Все размеры конечны и положительны
    pub fn is_valid(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite() && *v > 0.0)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// Центр тела (угол закреплён в начале координат)
    pub fn center(&self) -> [f64; 3] {
        [self.width * 0.5, self.height * 0.5, self.depth * 0.5]
    }
}
