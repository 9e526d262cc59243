//! Numbered text menu driving a single graph
//!
//! Generic over the input and output streams so a session can be replayed
//! from a string in tests.

use anyhow::Result;
use comfy_table::{ContentArrangement, Table};
use std::io::{BufRead, Write};
use trigraph::{Degree, Graph, Vertex};

const OPTIONS: &str = "\
1 - Show the graph
2 - Insert vertex
3 - Insert edge
4 - Remove edge
5 - Remove vertex
6 - List neighbors
7 - Degree table
8 - Check edge
9 - Validate path
Enter an option (0 to exit): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

pub struct Menu<R, W> {
    graph: Box<dyn Graph>,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(graph: Box<dyn Graph>, input: R, output: W, format: OutputFormat) -> Self {
        Menu {
            graph,
            input,
            output,
            format,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Box<dyn Graph>, W) {
        (self.graph, self.output)
    }

    /// Run until the user picks 0 or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "trigraph menu ({} graph, {})",
            self.graph.mode(),
            self.graph.backend()
        )?;

        loop {
            writeln!(self.output, "\n=================================")?;
            write!(self.output, "{}", OPTIONS)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break; // EOF
            };

            let choice = match line.trim().parse::<u32>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Invalid option. Enter a number.")?;
                    continue;
                }
            };

            match choice {
                0 => break,
                1 => self.show_graph()?,
                2 => self.insert_vertex()?,
                3 => self.insert_edge()?,
                4 => self.remove_edge()?,
                5 => self.remove_vertex()?,
                6 => self.list_neighbors()?,
                7 => self.show_degrees()?,
                8 => self.check_edge()?,
                9 => self.validate_path()?,
                _ => writeln!(self.output, "Unrecognized option.")?,
            }
        }

        writeln!(self.output, "Bye!")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt for one vertex token; `None` on empty input or EOF
    fn read_vertex(&mut self, hint: &str) -> Result<Option<Vertex>> {
        if hint.is_empty() {
            write!(self.output, "Enter the vertex: ")?;
        } else {
            write!(self.output, "Enter the vertex ({}): ", hint)?;
        }
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        match Vertex::from_token(&line) {
            Ok(vertex) => Ok(Some(vertex)),
            Err(e) => {
                writeln!(self.output, "Invalid value: {}", e)?;
                Ok(None)
            }
        }
    }

    fn read_pair(&mut self) -> Result<Option<(Vertex, Vertex)>> {
        let Some(origin) = self.read_vertex("origin")? else {
            return Ok(None);
        };
        let Some(destination) = self.read_vertex("destination")? else {
            return Ok(None);
        };
        Ok(Some((origin, destination)))
    }

    fn show_graph(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Json => writeln!(self.output, "{}", self.graph.snapshot().to_json()?)?,
            OutputFormat::Table => write!(self.output, "{}", self.graph)?,
        }
        Ok(())
    }

    fn insert_vertex(&mut self) -> Result<()> {
        if let Some(vertex) = self.read_vertex("")? {
            self.graph.insert_vertex(vertex.as_str());
            writeln!(self.output, "Vertex '{}' inserted.", vertex)?;
        }
        Ok(())
    }

    fn insert_edge(&mut self) -> Result<()> {
        if let Some((origin, destination)) = self.read_pair()? {
            self.graph.insert_edge(origin.as_str(), destination.as_str());
            writeln!(self.output, "Edge {} -> {} inserted.", origin, destination)?;
        }
        Ok(())
    }

    fn remove_edge(&mut self) -> Result<()> {
        if let Some((origin, destination)) = self.read_pair()? {
            self.graph.remove_edge(origin.as_str(), destination.as_str());
            writeln!(
                self.output,
                "Edge {} -> {} removed (if it existed).",
                origin, destination
            )?;
        }
        Ok(())
    }

    fn remove_vertex(&mut self) -> Result<()> {
        if let Some(vertex) = self.read_vertex("")? {
            self.graph.remove_vertex(vertex.as_str());
            writeln!(self.output, "Vertex '{}' removed (if it existed).", vertex)?;
        }
        Ok(())
    }

    fn list_neighbors(&mut self) -> Result<()> {
        let Some(vertex) = self.read_vertex("")? else {
            return Ok(());
        };
        if !self.graph.has_vertex(vertex.as_str()) {
            writeln!(self.output, "Vertex {} does not exist.", vertex)?;
            return Ok(());
        }

        let neighbors = self.graph.neighbors(vertex.as_str());
        match self.format {
            OutputFormat::Json => {
                writeln!(self.output, "{}", serde_json::to_string(&neighbors)?)?
            }
            OutputFormat::Table => writeln!(
                self.output,
                "Neighbors of {}: {}",
                vertex,
                format_list(&neighbors)
            )?,
        }
        Ok(())
    }

    fn show_degrees(&mut self) -> Result<()> {
        let table = self.graph.degree_table();
        match self.format {
            OutputFormat::Json => {
                writeln!(self.output, "{}", serde_json::to_string_pretty(&table)?)?;
            }
            OutputFormat::Table => {
                if table.is_empty() {
                    writeln!(self.output, "(no vertices)")?;
                    return Ok(());
                }

                let mut rendered = Table::new();
                rendered.set_content_arrangement(ContentArrangement::Dynamic);
                if self.graph.is_directed() {
                    rendered.set_header(vec!["Vertex", "In", "Out", "Total"]);
                } else {
                    rendered.set_header(vec!["Vertex", "Degree"]);
                }

                for (vertex, degree) in &table {
                    let cells = match *degree {
                        Degree::Directed {
                            in_degree,
                            out_degree,
                            total,
                        } => vec![
                            vertex.to_string(),
                            in_degree.to_string(),
                            out_degree.to_string(),
                            total.to_string(),
                        ],
                        Degree::Undirected(d) => vec![vertex.to_string(), d.to_string()],
                    };
                    rendered.add_row(cells);
                }

                writeln!(self.output, "{}", rendered)?;
            }
        }
        Ok(())
    }

    fn check_edge(&mut self) -> Result<()> {
        if let Some((origin, destination)) = self.read_pair()? {
            let exists = self.graph.edge_exists(origin.as_str(), destination.as_str());
            writeln!(
                self.output,
                "Edge {} -> {} exists: {}",
                origin, destination, exists
            )?;
        }
        Ok(())
    }

    fn validate_path(&mut self) -> Result<()> {
        write!(self.output, "Enter the path (vertices separated by spaces): ")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let path: Vec<&str> = line.split_whitespace().collect();
        let valid = self.graph.path_valid(&path);
        writeln!(self.output, "Path [{}] valid: {}", path.join(" -> "), valid)?;
        Ok(())
    }
}

fn format_list(vertices: &[Vertex]) -> String {
    let names: Vec<&str> = vertices.iter().map(Vertex::as_str).collect();
    format!("[{}]", names.join(", "))
}
