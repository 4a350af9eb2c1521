//! Standard atomic weights of the elements
//!
//! Conventional IUPAC standard atomic weights in g/mol. Elements without a
//! stable isotope carry the mass number of their longest-lived isotope.

/// A chemical element from the periodic table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_weight: f64,
}

const fn el(atomic_number: u8, symbol: &'static str, name: &'static str, atomic_weight: f64) -> Element {
    Element { atomic_number, symbol, name, atomic_weight }
}

/// All 118 elements, ordered by atomic number
pub static PERIODIC_TABLE: [Element; 118] = [
    el(1, "H", "Hydrogen", 1.008),
    el(2, "He", "Helium", 4.0026),
    el(3, "Li", "Lithium", 6.94),
    el(4, "Be", "Beryllium", 9.0122),
    el(5, "B", "Boron", 10.81),
    el(6, "C", "Carbon", 12.011),
    el(7, "N", "Nitrogen", 14.007),
    el(8, "O", "Oxygen", 15.999),
    el(9, "F", "Fluorine", 18.998),
    el(10, "Ne", "Neon", 20.180),
    el(11, "Na", "Sodium", 22.990),
    el(12, "Mg", "Magnesium", 24.305),
    el(13, "Al", "Aluminium", 26.982),
    el(14, "Si", "Silicon", 28.085),
    el(15, "P", "Phosphorus", 30.974),
    el(16, "S", "Sulfur", 32.06),
    el(17, "Cl", "Chlorine", 35.45),
    el(18, "Ar", "Argon", 39.948),
    el(19, "K", "Potassium", 39.098),
    el(20, "Ca", "Calcium", 40.078),
    el(21, "Sc", "Scandium", 44.956),
    el(22, "Ti", "Titanium", 47.867),
    el(23, "V", "Vanadium", 50.942),
    el(24, "Cr", "Chromium", 51.996),
    el(25, "Mn", "Manganese", 54.938),
    el(26, "Fe", "Iron", 55.845),
    el(27, "Co", "Cobalt", 58.933),
    el(28, "Ni", "Nickel", 58.693),
    el(29, "Cu", "Copper", 63.546),
    el(30, "Zn", "Zinc", 65.38),
    el(31, "Ga", "Gallium", 69.723),
    el(32, "Ge", "Germanium", 72.630),
    el(33, "As", "Arsenic", 74.922),
    el(34, "Se", "Selenium", 78.971),
    el(35, "Br", "Bromine", 79.904),
    el(36, "Kr", "Krypton", 83.798),
    el(37, "Rb", "Rubidium", 85.468),
    el(38, "Sr", "Strontium", 87.62),
    el(39, "Y", "Yttrium", 88.906),
    el(40, "Zr", "Zirconium", 91.224),
    el(41, "Nb", "Niobium", 92.906),
    el(42, "Mo", "Molybdenum", 95.95),
    el(43, "Tc", "Technetium", 98.0),
    el(44, "Ru", "Ruthenium", 101.07),
    el(45, "Rh", "Rhodium", 102.91),
    el(46, "Pd", "Palladium", 106.42),
    el(47, "Ag", "Silver", 107.87),
    el(48, "Cd", "Cadmium", 112.41),
    el(49, "In", "Indium", 114.82),
    el(50, "Sn", "Tin", 118.71),
    el(51, "Sb", "Antimony", 121.76),
    el(52, "Te", "Tellurium", 127.60),
    el(53, "I", "Iodine", 126.90),
    el(54, "Xe", "Xenon", 131.29),
    el(55, "Cs", "Caesium", 132.91),
    el(56, "Ba", "Barium", 137.33),
    el(57, "La", "Lanthanum", 138.91),
    el(58, "Ce", "Cerium", 140.12),
    el(59, "Pr", "Praseodymium", 140.91),
    el(60, "Nd", "Neodymium", 144.24),
    el(61, "Pm", "Promethium", 145.0),
    el(62, "Sm", "Samarium", 150.36),
    el(63, "Eu", "Europium", 151.96),
    el(64, "Gd", "Gadolinium", 157.25),
    el(65, "Tb", "Terbium", 158.93),
    el(66, "Dy", "Dysprosium", 162.50),
    el(67, "Ho", "Holmium", 164.93),
    el(68, "Er", "Erbium", 167.26),
    el(69, "Tm", "Thulium", 168.93),
    el(70, "Yb", "Ytterbium", 173.05),
    el(71, "Lu", "Lutetium", 174.97),
    el(72, "Hf", "Hafnium", 178.49),
    el(73, "Ta", "Tantalum", 180.95),
    el(74, "W", "Tungsten", 183.84),
    el(75, "Re", "Rhenium", 186.21),
    el(76, "Os", "Osmium", 190.23),
    el(77, "Ir", "Iridium", 192.22),
    el(78, "Pt", "Platinum", 195.08),
    el(79, "Au", "Gold", 196.97),
    el(80, "Hg", "Mercury", 200.59),
    el(81, "Tl", "Thallium", 204.38),
    el(82, "Pb", "Lead", 207.2),
    el(83, "Bi", "Bismuth", 208.98),
    el(84, "Po", "Polonium", 209.0),
    el(85, "At", "Astatine", 210.0),
    el(86, "Rn", "Radon", 222.0),
    el(87, "Fr", "Francium", 223.0),
    el(88, "Ra", "Radium", 226.0),
    el(89, "Ac", "Actinium", 227.0),
    el(90, "Th", "Thorium", 232.04),
    el(91, "Pa", "Protactinium", 231.04),
    el(92, "U", "Uranium", 238.03),
    el(93, "Np", "Neptunium", 237.0),
    el(94, "Pu", "Plutonium", 244.0),
    el(95, "Am", "Americium", 243.0),
    el(96, "Cm", "Curium", 247.0),
    el(97, "Bk", "Berkelium", 247.0),
    el(98, "Cf", "Californium", 251.0),
    el(99, "Es", "Einsteinium", 252.0),
    el(100, "Fm", "Fermium", 257.0),
    el(101, "Md", "Mendelevium", 258.0),
    el(102, "No", "Nobelium", 259.0),
    el(103, "Lr", "Lawrencium", 266.0),
    el(104, "Rf", "Rutherfordium", 267.0),
    el(105, "Db", "Dubnium", 268.0),
    el(106, "Sg", "Seaborgium", 269.0),
    el(107, "Bh", "Bohrium", 270.0),
    el(108, "Hs", "Hassium", 277.0),
    el(109, "Mt", "Meitnerium", 278.0),
    el(110, "Ds", "Darmstadtium", 281.0),
    el(111, "Rg", "Roentgenium", 282.0),
    el(112, "Cn", "Copernicium", 285.0),
    el(113, "Nh", "Nihonium", 286.0),
    el(114, "Fl", "Flerovium", 289.0),
    el(115, "Mc", "Moscovium", 290.0),
    el(116, "Lv", "Livermorium", 293.0),
    el(117, "Ts", "Tennessine", 294.0),
    el(118, "Og", "Oganesson", 294.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_by_atomic_number() {
        for (i, element) in PERIODIC_TABLE.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1, "{} out of order", element.symbol);
        }
    }

    #[test]
    fn test_symbols_are_well_formed() {
        for element in PERIODIC_TABLE.iter() {
            let mut chars = element.symbol.chars();
            assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()), "{}", element.symbol);
            assert!(chars.all(|c| c.is_ascii_lowercase()), "{}", element.symbol);
            assert!(element.symbol.len() <= 2);
            assert!(element.atomic_weight > 0.0);
        }
    }
}
