//! Built-in catalog content: guarantees the app is useful without any external config.

use crate::catalog::Catalog;
use crate::domain::ChapterContent;

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

fn chapter(topics: &[&str], concepts: &[&str], formulas: &[&str], examples: &[&str], key_points: &[&str]) -> ChapterContent {
  ChapterContent {
    topics: strings(topics),
    concepts: strings(concepts),
    formulas: strings(formulas),
    examples: strings(examples),
    key_points: strings(key_points),
  }
}

/// The full built-in catalog for mathematics, physics, chemistry and biology (SSC1..HSC2).
pub fn seed_catalog() -> Catalog {
  let mut cat = Catalog::new();
  for (subject, grade, name, content) in seed_chapters() {
    cat.insert(subject, grade, name, content);
  }
  cat
}

fn seed_chapters() -> Vec<(&'static str, &'static str, &'static str, ChapterContent)> {
  vec![
    // ---------------- mathematics ----------------
    ("mathematics", "ssc1", "Real Numbers", chapter(
      &["Rational Numbers", "Irrational Numbers", "Real Number System", "Properties of Real Numbers"],
      &["Number line representation", "Decimal expansion", "Euclid's division lemma"],
      &["√(ab) = √a × √b", "√(a/b) = √a / √b", "a^m × a^n = a^(m+n)"],
      &["√2 is irrational", "0.333... = 1/3", "HCF and LCM problems"],
      &["Every real number has a decimal expansion", "Rational numbers have terminating or repeating decimals"],
    )),
    ("mathematics", "ssc1", "Polynomials", chapter(
      &["Polynomial Definition", "Degree of Polynomial", "Zeros of Polynomial", "Remainder Theorem"],
      &["Linear polynomial", "Quadratic polynomial", "Cubic polynomial", "Factor theorem"],
      &["p(x) = ax + b", "p(x) = ax² + bx + c", "If p(a) = 0, then (x-a) is a factor"],
      &["x² - 5x + 6 = (x-2)(x-3)", "Finding zeros graphically"],
      &["Degree determines the maximum number of zeros", "Remainder theorem helps find remainders"],
    )),
    ("mathematics", "ssc1", "Coordinate Geometry", chapter(
      &["Cartesian Plane", "Distance Formula", "Section Formula", "Area of Triangle"],
      &["Plotting points", "Quadrants", "Midpoint", "Collinear points"],
      &["d = √[(x₂-x₁)² + (y₂-y₁)²]", "Midpoint = ((x₁+x₂)/2, (y₁+y₂)/2)"],
      &["Distance between (0,0) and (3,4) is 5", "Triangle area using coordinates"],
      &["Distance formula is based on Pythagoras theorem", "Section formula divides line segments"],
    )),
    ("mathematics", "ssc2", "Quadratic Equations", chapter(
      &["Standard Form", "Factorization Method", "Quadratic Formula", "Nature of Roots"],
      &["Discriminant", "Sum and product of roots", "Completing the square"],
      &["ax² + bx + c = 0", "x = (-b ± √(b²-4ac))/2a", "Δ = b² - 4ac"],
      &["x² - 5x + 6 = 0 has roots 2, 3", "Word problems on quadratic equations"],
      &["Discriminant determines nature of roots", "Two methods: factorization and formula"],
    )),
    ("mathematics", "ssc2", "Arithmetic Progressions", chapter(
      &["AP Definition", "nth Term", "Sum of n Terms", "Applications"],
      &["Common difference", "First term", "Last term", "Mean"],
      &["aₙ = a + (n-1)d", "Sₙ = n/2[2a + (n-1)d]", "Sₙ = n/2(a + l)"],
      &["2, 5, 8, 11... has d = 3", "Sum of first 10 natural numbers"],
      &["Common difference is constant", "Two formulas for sum depending on known values"],
    )),
    ("mathematics", "hsc1", "Trigonometric Functions", chapter(
      &["Trigonometric Ratios", "Trigonometric Identities", "Trigonometric Equations"],
      &["Unit circle", "Periodicity", "Domain and range", "Graphs"],
      &["sin²θ + cos²θ = 1", "tan θ = sin θ/cos θ", "sin(A+B) = sinA cosB + cosA sinB"],
      &["sin 30° = 1/2", "cos 60° = 1/2", "Solving sin θ = 1/2"],
      &["Fundamental identities are crucial", "Trigonometric functions are periodic"],
    )),
    ("mathematics", "hsc1", "Limits and Derivatives", chapter(
      &["Concept of Limit", "Derivative Definition", "Rules of Differentiation"],
      &["Left and right limits", "Continuity", "Differentiability"],
      &["lim(x→a) f(x)", "d/dx(xⁿ) = nxⁿ⁻¹", "d/dx(sin x) = cos x"],
      &["lim(x→0) sin x/x = 1", "Derivative of x² is 2x"],
      &["Limits help define derivatives", "Derivative represents rate of change"],
    )),
    ("mathematics", "hsc2", "Integration", chapter(
      &["Indefinite Integration", "Definite Integration", "Applications of Integration"],
      &["Antiderivative", "Fundamental theorem of calculus", "Area under curve"],
      &["∫xⁿ dx = xⁿ⁺¹/(n+1) + C", "∫sin x dx = -cos x + C", "∫ₐᵇ f(x)dx"],
      &["∫x² dx = x³/3 + C", "Area between curves"],
      &["Integration is reverse of differentiation", "Definite integrals give numerical values"],
    )),
    // ---------------- physics ----------------
    ("physics", "ssc1", "Light", chapter(
      &["Reflection of Light", "Refraction of Light", "Lenses", "Optical Instruments"],
      &["Laws of reflection", "Snell's law", "Total internal reflection", "Lens formula"],
      &["1/f = 1/v - 1/u", "n = sin i/sin r", "Power P = 1/f"],
      &["Mirror formula applications", "Lens combinations"],
      &["Light travels in straight lines", "Refraction causes bending of light"],
    )),
    ("physics", "ssc1", "Electricity", chapter(
      &["Electric Current", "Potential Difference", "Resistance", "Electric Power"],
      &["Ohm's law", "Series and parallel circuits", "Heating effect"],
      &["V = IR", "P = VI = I²R = V²/R", "Rs = R₁ + R₂ + R₃"],
      &["Calculating current in circuits", "Power consumption problems"],
      &["Current flows from high to low potential", "Resistance opposes current flow"],
    )),
    ("physics", "ssc2", "Magnetic Effects of Electric Current", chapter(
      &["Magnetic Field", "Force on Current-carrying Conductor", "Electromagnetic Induction"],
      &["Right-hand rule", "Fleming's rules", "Lenz's law", "Faraday's law"],
      &["F = BIL sin θ", "ε = -dΦ/dt", "B = μ₀I/2πr"],
      &["Force on conductor in magnetic field", "EMF in moving coil"],
      &["Moving charges create magnetic fields", "Changing magnetic flux induces EMF"],
    )),
    ("physics", "hsc1", "Waves", chapter(
      &["Wave Motion", "Sound Waves", "Wave Properties", "Doppler Effect"],
      &["Wavelength", "Frequency", "Amplitude", "Wave speed"],
      &["v = fλ", "f' = f(v ± vₒ)/(v ± vₛ)", "I ∝ A²"],
      &["Sound wave calculations", "Doppler effect in ambulance siren"],
      &["Waves transfer energy without transferring matter", "Doppler effect changes frequency"],
    )),
    ("physics", "hsc2", "Modern Physics", chapter(
      &["Photoelectric Effect", "Atomic Structure", "Nuclear Physics"],
      &["Quantum nature of light", "Energy levels", "Radioactivity"],
      &["E = hf", "E = mc²", "λ = h/p"],
      &["Einstein's photoelectric equation", "Nuclear reactions"],
      &["Light has particle nature", "Energy is quantized in atoms"],
    )),
    // ---------------- chemistry ----------------
    ("chemistry", "ssc1", "Acids, Bases and Salts", chapter(
      &["Acid-Base Indicators", "pH Scale", "Neutralization", "Salt Formation"],
      &["Arrhenius theory", "Bronsted-Lowry theory", "Strong and weak acids"],
      &["pH = -log[H⁺]", "pOH = -log[OH⁻]", "pH + pOH = 14"],
      &["HCl + NaOH → NaCl + H₂O", "pH of common substances"],
      &["Acids release H⁺ ions", "Bases release OH⁻ ions", "pH scale ranges 0-14"],
    )),
    ("chemistry", "ssc1", "Metals and Non-metals", chapter(
      &["Properties of Metals", "Properties of Non-metals", "Extraction of Metals", "Corrosion"],
      &["Metallic bonding", "Reactivity series", "Reduction", "Oxidation"],
      &["Metal + Acid → Salt + H₂", "Metal oxide + Acid → Salt + Water"],
      &["Zn + HCl → ZnCl₂ + H₂", "Extraction of iron from ore"],
      &["Metals are good conductors", "Non-metals are poor conductors"],
    )),
    ("chemistry", "ssc2", "Carbon and its Compounds", chapter(
      &["Covalent Bonding", "Saturated Hydrocarbons", "Unsaturated Hydrocarbons", "Functional Groups"],
      &["Tetravalency of carbon", "Isomerism", "Homologous series"],
      &["CₙH₂ₙ₊₂ (alkanes)", "CₙH₂ₙ (alkenes)", "CₙH₂ₙ₋₂ (alkynes)"],
      &["CH₄, C₂H₆, C₃H₈ (alkane series)", "Ethanol, Ethanoic acid"],
      &["Carbon forms four covalent bonds", "Organic compounds have carbon backbone"],
    )),
    ("chemistry", "hsc1", "Chemical Bonding", chapter(
      &["Ionic Bonding", "Covalent Bonding", "Metallic Bonding", "Intermolecular Forces"],
      &["Electronegativity", "Bond polarity", "Hybridization", "VSEPR theory"],
      &["Lattice energy", "Bond energy", "Dipole moment"],
      &["NaCl formation", "H₂O molecular geometry", "NH₃ structure"],
      &["Ionic bonds form between metals and non-metals", "Covalent bonds share electrons"],
    )),
    ("chemistry", "hsc2", "Chemical Kinetics", chapter(
      &["Rate of Reaction", "Factors Affecting Rate", "Rate Law", "Activation Energy"],
      &["Collision theory", "Catalysis", "Order of reaction", "Half-life"],
      &["Rate = k[A]ᵐ[B]ⁿ", "k = Ae^(-Ea/RT)", "t₁/₂ = 0.693/k"],
      &["Effect of temperature on rate", "Enzyme catalysis"],
      &["Rate depends on concentration", "Catalysts lower activation energy"],
    )),
    // ---------------- biology ----------------
    ("biology", "ssc1", "Life Processes", chapter(
      &["Nutrition", "Respiration", "Transportation", "Excretion"],
      &["Photosynthesis", "Cellular respiration", "Circulatory system", "Kidney function"],
      &["6CO₂ + 6H₂O → C₆H₁₂O₆ + 6O₂", "C₆H₁₂O₆ + 6O₂ → 6CO₂ + 6H₂O + ATP"],
      &["Stomatal function", "Blood circulation", "Nephron structure"],
      &["All living organisms need energy", "Waste products must be removed"],
    )),
    ("biology", "ssc2", "Heredity and Evolution", chapter(
      &["Mendel's Laws", "Chromosomes", "Sex Determination", "Evolution"],
      &["Dominant and recessive traits", "Genetic cross", "Natural selection"],
      &["Monohybrid ratio 3:1", "Dihybrid ratio 9:3:3:1"],
      &["Pea plant experiments", "Human blood groups", "Darwin's finches"],
      &["Traits are inherited from parents", "Evolution occurs through natural selection"],
    )),
    ("biology", "hsc1", "Cell Biology", chapter(
      &["Cell Structure", "Cell Division", "Biomolecules", "Enzymes"],
      &["Prokaryotic vs Eukaryotic", "Mitosis and Meiosis", "Protein structure"],
      &["Enzyme kinetics: Km, Vmax", "Cell cycle phases"],
      &["Plant vs Animal cell", "DNA replication", "Protein synthesis"],
      &["Cell is the basic unit of life", "Enzymes are biological catalysts"],
    )),
    ("biology", "hsc2", "Molecular Biology", chapter(
      &["DNA Structure", "Gene Expression", "Genetic Engineering", "Biotechnology"],
      &["Central dogma", "Transcription", "Translation", "PCR"],
      &["DNA → RNA → Protein", "Genetic code triplets"],
      &["DNA fingerprinting", "Insulin production", "Gene therapy"],
      &["DNA stores genetic information", "Biotechnology has medical applications"],
    )),
  ]
}
